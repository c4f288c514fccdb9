use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара: небольшое целое, уникальное и стабильное.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i32);

impl ProductId {
    /// Зарезервированный id fallback-товара ("Product Not Found").
    pub const RESERVED: ProductId = ProductId(0);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// True для id=0. Каталог не принимает такие товары: id 0 во всём
    /// прототипе означает "карточка не найдена".
    pub fn is_reserved(&self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// Product
// ============================================================================

/// Каноническая карточка товара.
///
/// Immutable после создания: весь набор определяется на старте процесса и
/// живёт до его завершения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Display-цена ("1,500.00") - строка как есть, в расчётах не участвует.
    pub price: String,

    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,

    pub category: String,

    pub description: String,
}

impl Product {
    pub fn new(
        id: i32,
        name: &str,
        price: &str,
        image_ref: &str,
        category: &str,
        description: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            price: price.to_string(),
            image_ref: ImageRef::new(image_ref),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if self.price.trim().is_empty() {
            return Err("Product price must not be empty".into());
        }
        if self.category.trim().is_empty() {
            return Err("Product category must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_image_ref() {
        let product = Product::new(1, "Lip Balm", "790", "product_img_lipbalm", "Skincare", "x");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["imageRef"], "product_img_lipbalm");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let product = Product::new(1, "  ", "790", "img", "Skincare", "x");
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_reserved_id() {
        assert!(ProductId::new(0).is_reserved());
        assert!(!ProductId::new(101).is_reserved());
    }
}
