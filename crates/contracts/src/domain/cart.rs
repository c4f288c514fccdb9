use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор строки корзины.
///
/// Отдельное пространство id: с `ProductId` не связан внешним ключом —
/// sample-данные прототипа нумеруют корзину независимо от каталога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItemId(pub i32);

impl CartItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// Cart Item
// ============================================================================

/// Строка корзины.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,

    pub name: String,

    pub description: String,

    /// Числовая цена строки - в отличие от display-цены `Product`.
    pub price: f64,

    /// Количество; ноль допустим (строка остаётся в корзине).
    pub quantity: u32,

    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,

    /// Абсолютная скидка на строку, всегда >= 0.
    pub discount: f64,
}

impl CartItem {
    pub fn new(
        id: i32,
        name: &str,
        description: &str,
        price: f64,
        quantity: u32,
        image_ref: &str,
        discount: f64,
    ) -> Self {
        Self {
            id: CartItemId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price,
            quantity,
            image_ref: ImageRef::new(image_ref),
            discount,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Cart item name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Cart item price must be a non-negative number".into());
        }
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err("Cart item discount must be a non-negative number".into());
        }
        Ok(())
    }
}
