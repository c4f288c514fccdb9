//! Домашний таб: баннер, сетка "New Arrivals", карусель "Offers",
//! плитки типов кожи и "Most Purchased".
//!
//! Локальное состояние - строка поиска; именно она проверяет сохранение
//! состояния таба при переключениях.

use contracts::domain::{ImageRef, Product, SkinType};
use serde::{Deserialize, Serialize};

use crate::routes::product_detail_path;

/// Ширина ряда сетки new arrivals (две карточки в ряд).
const GRID_ROW_WIDTH: usize = 2;

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomeState {
    #[serde(rename = "searchQuery")]
    pub search_query: String,
}

// ============================================================================
// View
// ============================================================================

/// Карточка товара в сетке/карусели.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTile {
    pub id: i32,
    pub name: String,
    pub price: String,
    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,
    /// Путь карточки товара для навигации.
    pub detail_path: String,
}

impl ProductTile {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            price: product.price.clone(),
            image_ref: product.image_ref.clone(),
            detail_path: product_detail_path(product.id.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub banner: String,
    pub search_query: String,
    /// Сетка new arrivals, порезанная на ряды по две карточки.
    pub new_arrival_rows: Vec<Vec<ProductTile>>,
    pub offers: Vec<String>,
    pub skin_types: Vec<SkinType>,
    pub most_purchased: Vec<ProductTile>,
}

pub fn view(
    state: &HomeState,
    new_arrivals: &[Product],
    offers: &[String],
    skin_types: &[SkinType],
    most_purchased: &[Product],
) -> HomeView {
    let tiles: Vec<ProductTile> = new_arrivals.iter().map(ProductTile::from_product).collect();
    HomeView {
        banner: "Enhance Your Natural Beauty".to_string(),
        search_query: state.search_query.clone(),
        new_arrival_rows: chunk_rows(tiles, GRID_ROW_WIDTH),
        offers: offers.to_vec(),
        skin_types: skin_types.to_vec(),
        most_purchased: most_purchased.iter().map(ProductTile::from_product).collect(),
    }
}

/// Режет плоский список на ряды фиксированной ширины; последний ряд может
/// быть короче.
fn chunk_rows<T>(items: Vec<T>, width: usize) -> Vec<Vec<T>> {
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(items.len().div_ceil(width));
    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < width => row.push(item),
            _ => rows.push(vec![item]),
        }
    }
    rows
}
