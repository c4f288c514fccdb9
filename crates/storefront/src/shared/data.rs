//! Seed-данные прототипа.
//!
//! Всё содержимое витрины задаётся константно на старте процесса. Данные
//! собираются функциями-конструкторами и передаются потребителям явно;
//! ambient-глобалов со списками больше нет.

use contracts::catalog::{Catalog, CatalogError, CatalogSection};
use contracts::domain::{CartItem, Product, ProfileMenuEntry, SkinType, UserInfo};

// ============================================================================
// Home screen
// ============================================================================

/// Секция "New Arrivals" домашнего экрана (ids 1-6).
pub fn new_arrivals() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Lip Balm",
            "790",
            "product_img_lipbalm",
            "Skincare",
            "Moisturizing formula with SPF 15 and deep cherry flavor.",
        ),
        Product::new(
            2,
            "Face Wash",
            "1650",
            "product_img_facewash",
            "Skincare",
            "Gentle foaming cleanser removing dirt and excess oil.",
        ),
        Product::new(
            3,
            "Body Milk",
            "3200",
            "product_img_bodymilk",
            "Body Care",
            "Luxurious, non-greasy body milk for 24-hour hydration.",
        ),
        Product::new(
            4,
            "Lotion Oil",
            "2850",
            "product_img_lotionoil",
            "Body Care",
            "Deeply nourishing oil blend to enhance skin's natural barrier.",
        ),
        Product::new(
            5,
            "Toner Mist",
            "1250",
            "product_img_toner",
            "Skincare",
            "Refreshing mist to balance pH and minimize pores.",
        ),
        Product::new(
            6,
            "Face Serum",
            "1380",
            "product_img_facecerum",
            "Skincare",
            "Potent serum for targeted repair and intense revitalization.",
        ),
    ]
}

/// Строки карусели "Offers".
pub fn offers() -> Vec<String> {
    vec![
        "20% Off Skincare".to_string(),
        "Free Shipping Over $50".to_string(),
        "Buy 2 Get 1 Free".to_string(),
        "Seasonal Sale".to_string(),
    ]
}

/// Плитки "тип кожи" (ids 7-9).
pub fn skin_types() -> Vec<SkinType> {
    vec![
        SkinType::new(7, "Oily Skin", "skintype_oilyskin"),
        SkinType::new(8, "Dry Skin", "skintype_dryskin"),
        SkinType::new(9, "Sensitive Skin", "skintype_sensitiveskin"),
    ]
}

/// Секция "Most Purchased" (ids 10-15).
pub fn most_purchased() -> Vec<Product> {
    vec![
        Product::new(
            10,
            "Daily Cream",
            "1300.00",
            "product_img_dailycream",
            "Skincare",
            "Daily non-comedogenic cream for foundational hydration.",
        ),
        Product::new(
            11,
            "Face Cream",
            "1600.00",
            "product_img_facilcream",
            "Skincare",
            "Rich cream blend to combat dryness and improve texture.",
        ),
        Product::new(
            12,
            "Oil Serum",
            "2800.00",
            "product_img_oilserum",
            "Skincare",
            "Lightweight oil to balance sebum production and reduce redness.",
        ),
        Product::new(
            13,
            "Eye Shadow",
            "1000.00",
            "product_img_eyeshadow",
            "Makeup",
            "Highly pigmented shadow for dramatic, long-lasting color.",
        ),
        Product::new(
            14,
            "Mascara",
            "980.00",
            "product_img_mascara",
            "Makeup",
            "Volumizing mascara for dark, full, and separated lashes.",
        ),
        Product::new(
            15,
            "Lipstick",
            "820.00",
            "product_img_lipstick",
            "Makeup",
            "Classic matte lipstick offering rich color and comfortable wear.",
        ),
    ]
}

// ============================================================================
// Catalog
// ============================================================================

/// Секции каталога в порядке отображения.
pub fn catalog_sections() -> Vec<CatalogSection> {
    vec![
        CatalogSection::new(
            "Anti-Aging Solutions",
            vec![
                Product::new(
                    101,
                    "Acne Face Wash",
                    "1,500.00",
                    "product_acne_facewash",
                    "Skincare",
                    "Targeted wash to reduce breakouts and minimize signs of aging.",
                ),
                Product::new(
                    104,
                    "Hydration Lotion",
                    "2,300.00",
                    "product_hydration_lotion",
                    "Skincare",
                    "Intensive lotion that locks in moisture and plumps skin.",
                ),
                Product::new(
                    107,
                    "Body Butter",
                    "1,900.00",
                    "product_body_butter",
                    "Body Care",
                    "Thick, creamy butter that restores elasticity to dry skin.",
                ),
                Product::new(
                    108,
                    "Radiance Tablets",
                    "3,500.00",
                    "product_radiance_tablets",
                    "Wellness",
                    "Daily supplement to promote inner glow and clear complexion.",
                ),
            ],
        ),
        CatalogSection::new(
            "Acne & Blemish Control Solutions",
            vec![
                Product::new(
                    201,
                    "Pimple Clear",
                    "1,100.00",
                    "product_pimple_clear",
                    "Skincare",
                    "Spot treatment with salicylic acid to quickly reduce inflammation.",
                ),
                Product::new(
                    203,
                    "Face Protection",
                    "2,500.00",
                    "product_face_protection",
                    "Skincare",
                    "Broad-spectrum SPF 50 sunscreen for complete UV defense.",
                ),
                Product::new(
                    204,
                    "Sun Cream",
                    "1,950.00",
                    "product_sun_cream",
                    "Skincare",
                    "Lightweight, non-greasy sun cream for daily protection.",
                ),
                Product::new(
                    206,
                    "Moisturizer",
                    "2,700.00",
                    "product_moisturizer",
                    "Skincare",
                    "Oil-free moisturizer for clear, hydrated, and calm skin.",
                ),
            ],
        ),
        CatalogSection::new(
            "Hair Care Essentials",
            vec![
                Product::new(
                    301,
                    "Scalp Shampoo",
                    "1,400.00",
                    "product_hair_shampoo",
                    "Hair Care",
                    "Gentle shampoo to soothe and clarify the scalp, removing buildup.",
                ),
                Product::new(
                    302,
                    "Deep Conditioner",
                    "1,600.00",
                    "product_hair_conditioner",
                    "Hair Care",
                    "Restorative conditioner for brittle, damaged, and over-processed hair.",
                ),
                Product::new(
                    303,
                    "Hair Oil",
                    "2,100.00",
                    "product_hair_oil",
                    "Hair Care",
                    "Shine-enhancing oil that reduces frizz and breakage.",
                ),
                Product::new(
                    304,
                    "Hair Mask",
                    "2,900.00",
                    "product_hair_mask",
                    "Hair Care",
                    "Intensive weekly mask for deep repair and moisture.",
                ),
            ],
        ),
        CatalogSection::new(
            "Makeup Must-Haves",
            vec![
                Product::new(
                    401,
                    "Liquid Foundation",
                    "3,200.00",
                    "product_foundation",
                    "Makeup",
                    "Full coverage foundation with a natural, satin finish.",
                ),
                Product::new(
                    402,
                    "Matte Lipstick",
                    "1,700.00",
                    "product_lipstick",
                    "Makeup",
                    "Comfortable matte formula in rich, classic colors.",
                ),
                Product::new(
                    403,
                    "Eyeliner Pen",
                    "1,350.00",
                    "product_eyeliner",
                    "Makeup",
                    "Precision eyeliner with a waterproof and smudge-proof formula.",
                ),
                Product::new(
                    404,
                    "Blush Palette",
                    "2,000.00",
                    "product_blush",
                    "Makeup",
                    "Curated palette for contouring, blushing, and highlighting.",
                ),
            ],
        ),
        CatalogSection::new(
            "Body Care Daily",
            vec![
                Product::new(
                    501,
                    "Hand Cream",
                    "950.00",
                    "product_handcream",
                    "Body Care",
                    "Fast-absorbing cream to protect and soften dry, cracked hands.",
                ),
                Product::new(
                    502,
                    "Foot Scrub",
                    "1,100.00",
                    "product_scrub",
                    "Body Care",
                    "Exfoliating scrub to smooth rough patches and revitalize feet.",
                ),
                Product::new(
                    503,
                    "Body Spray",
                    "1,600.00",
                    "product_bodyspray",
                    "Body Care",
                    "Lightly scented body spray for a refreshing daily lift.",
                ),
                Product::new(
                    504,
                    "Aroma Oil",
                    "2,800.00",
                    "product_aromaoil",
                    "Wellness",
                    "Relaxing oil blend to soothe muscles and promote restful sleep.",
                ),
            ],
        ),
    ]
}

/// Собирает каталог витрины из seed-секций.
pub fn seed_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(catalog_sections())
}

// ============================================================================
// Cart / Profile
// ============================================================================

/// Sample-строки корзины. На старте корзина пуста; строки используются
/// тестами и demo-сессией.
pub fn sample_cart_items() -> Vec<CartItem> {
    vec![
        CartItem::new(
            1,
            "Lip Balm",
            "Moisturizing formula with SPF 15.",
            790.0,
            2,
            "product_img_lipbalm",
            0.0,
        ),
        CartItem::new(
            2,
            "Face Wash",
            "Gentle foaming cleanser.",
            1650.0,
            1,
            "product_img_facewash",
            150.0,
        ),
        CartItem::new(
            3,
            "Toner Mist",
            "Refreshing mist to balance pH.",
            1250.0,
            1,
            "product_img_toner",
            0.0,
        ),
    ]
}

/// Жёстко заданный пользователь профиля.
pub fn user_info() -> UserInfo {
    UserInfo::new(
        "Darlene Robertson",
        "darlene.robertson@example.com",
        "profile_placeholder",
    )
}

/// Пункты меню профиля. Часть маршрутов в таблице не зарегистрирована -
/// переход по ним остаётся no-op; "Order History" ведёт на home.
pub fn profile_menu() -> Vec<ProfileMenuEntry> {
    vec![
        ProfileMenuEntry::new("Edit Profile", "person", "edit_profile_route"),
        ProfileMenuEntry::new("Shopping Address", "location_on", "shipping_address_route"),
        ProfileMenuEntry::new("Wishlist", "favorite", "wishlist_route"),
        ProfileMenuEntry::new("Order History", "receipt", "home_screen"),
        ProfileMenuEntry::new("Notifications", "notifications", "notifications_route"),
        ProfileMenuEntry::new("Cards", "credit_card", "cards_route"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::ProductId;

    #[test]
    fn test_seed_catalog_builds() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.sections().len(), 5);
        assert_eq!(catalog.product_count(), 20);
    }

    #[test]
    fn test_seed_catalog_section_order() {
        let catalog = seed_catalog().unwrap();
        let labels: Vec<&str> = catalog.sections().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Anti-Aging Solutions",
                "Acne & Blemish Control Solutions",
                "Hair Care Essentials",
                "Makeup Must-Haves",
                "Body Care Daily",
            ]
        );
    }

    #[test]
    fn test_known_product_is_findable() {
        let catalog = seed_catalog().unwrap();
        let product = catalog.find_by_id(ProductId::new(101)).unwrap();
        assert_eq!(product.name, "Acne Face Wash");
        assert_eq!(product.price, "1,500.00");
    }

    #[test]
    fn test_fixture_rows_validate() {
        for product in new_arrivals().iter().chain(most_purchased().iter()) {
            assert_eq!(product.validate(), Ok(()));
        }
        for item in sample_cart_items() {
            assert_eq!(item.validate(), Ok(()));
        }
    }

    #[test]
    fn test_profile_menu_has_six_entries() {
        let menu = profile_menu();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu[3].label, "Order History");
        assert_eq!(menu[3].route, "home_screen");
    }
}
