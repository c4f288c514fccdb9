//! Static grouped product catalog.
//!
//! Содержит:
//! - `Catalog` - read-only каталог, собирается один раз на старте
//! - `find_by_id` - единственная операция поиска (flatten + first match)
//! - `FALLBACK_PRODUCT` - sentinel, подставляемый вызывающей стороной при
//!   промахе поиска или запросе id=0

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::{ImageRef, Product, ProductId};

/// Fallback-товар. Подстановка выполняется вызывающей стороной (экраном),
/// сам `find_by_id` промах сообщает через `None`.
pub static FALLBACK_PRODUCT: Lazy<Product> = Lazy::new(|| Product {
    id: ProductId::RESERVED,
    name: "Product Not Found".to_string(),
    price: "0.00".to_string(),
    image_ref: ImageRef::new("product_img_placeholder"),
    category: "N/A".to_string(),
    description: "The requested product could not be found. Please return to the product listing."
        .to_string(),
});

/// Ошибки сборки каталога. Возможны только на старте процесса — после
/// успешной сборки каталог неизменяем.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {id} in section '{section}'")]
    DuplicateId { id: i32, section: String },

    #[error("product id 0 is reserved for the fallback sentinel: '{name}'")]
    ReservedId { name: String },

    #[error("product '{name}' is invalid: {reason}")]
    InvalidProduct { name: String, reason: String },
}

/// Одна категория каталога: ярлык + упорядоченный список товаров.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub label: String,
    pub products: Vec<Product>,
}

impl CatalogSection {
    pub fn new(label: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            label: label.into(),
            products,
        }
    }
}

/// Read-only каталог, сгруппированный по категориям.
///
/// Порядок секций — порядок вставки; значим только для отображения.
/// Экземпляр создаётся один раз на старте и передаётся потребителям по
/// ссылке (никаких ambient-глобалов).
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Собирает каталог, проверяя seed-данные: дубль id и
    /// зарезервированный id=0 — ошибки сборки.
    pub fn new(sections: Vec<CatalogSection>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for section in &sections {
            for product in &section.products {
                if product.id.is_reserved() {
                    return Err(CatalogError::ReservedId {
                        name: product.name.clone(),
                    });
                }
                product.validate().map_err(|reason| CatalogError::InvalidProduct {
                    name: product.name.clone(),
                    reason,
                })?;
                if !seen.insert(product.id) {
                    return Err(CatalogError::DuplicateId {
                        id: product.id.value(),
                        section: section.label.clone(),
                    });
                }
            }
        }
        Ok(Self { sections })
    }

    /// Ищет товар по id: все секции разворачиваются в одну
    /// последовательность, возвращается первое совпадение.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.sections
            .iter()
            .flat_map(|section| section.products.iter())
            .find(|product| product.id == id)
    }

    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Общее число товаров по всем секциям.
    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.products.is_empty())
    }
}
