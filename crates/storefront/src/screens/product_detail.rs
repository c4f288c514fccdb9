//! Карточка товара.
//!
//! Привязывает целочисленный id из параметра маршрута и применяет политику
//! fallback: промах поиска подменяется sentinel-товаром, а запрос id=0
//! всегда даёт выделенный error-view - даже промах и "явный ноль" источник
//! не различал, это поведение сохранено.

use contracts::catalog::{Catalog, FALLBACK_PRODUCT};
use contracts::domain::{ImageRef, Product, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductDetailView {
    /// Запрошен id=0: выделенный экран ошибки.
    NotFound { title: String, message: String },
    Found {
        title: String,
        #[serde(rename = "imageRef")]
        image_ref: ImageRef,
        category_line: String,
        price_line: String,
        description: String,
        reviews_line: String,
        total_line: String,
        add_to_cart_label: String,
    },
}

pub fn view(product_id: i32, catalog: &Catalog) -> ProductDetailView {
    if product_id == 0 {
        return ProductDetailView::NotFound {
            title: "Product Not Found".to_string(),
            message: "Error: Product with ID 0 not found.".to_string(),
        };
    }

    // Промах подменяется fallback-товаром; его карточка рендерится как
    // обычная, с именем "Product Not Found".
    let product: &Product = catalog
        .find_by_id(ProductId::new(product_id))
        .unwrap_or(&FALLBACK_PRODUCT);

    ProductDetailView::Found {
        title: product.name.clone(),
        image_ref: product.image_ref.clone(),
        category_line: format!("Category: {}", product.category),
        price_line: format!("LKR {}", product.price),
        description: product.description.clone(),
        reviews_line: "Customer Reviews (4.5)".to_string(),
        total_line: format!("Total: LKR {}", product.price),
        add_to_cart_label: "Add to Cart".to_string(),
    }
}
