//! Shared contracts для storefront-ядра.
//!
//! Содержит:
//! - `domain` - каноническая схема данных (Product, CartItem, профиль)
//! - `catalog` - статический сгруппированный каталог с lookup-by-id

pub mod catalog;
pub mod domain;
