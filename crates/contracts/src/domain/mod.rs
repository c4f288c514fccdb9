//! Canonical domain types - единственный источник правды для схемы данных.
//!
//! Исходный прототип держал несколько расходящихся форм `Product` в разных
//! файлах; здесь они сведены к одной канонической схеме.

pub mod cart;
pub mod image;
pub mod product;
pub mod profile;
pub mod skin_type;

// Re-exports
pub use cart::{CartItem, CartItemId};
pub use image::ImageRef;
pub use product::{Product, ProductId};
pub use profile::{ProfileMenuEntry, UserInfo};
pub use skin_type::SkinType;
