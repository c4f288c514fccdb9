//! Таб корзины.
//!
//! Стартует пустым; пустое состояние отображается парой статических строк.
//! Строки корзины живут в состоянии таба и переживают переключения табов.

use contracts::domain::CartItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub discount: f64,
    /// price * quantity - discount, не меньше нуля.
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartView {
    Empty { title: String, subtitle: String },
    Items { rows: Vec<CartRow>, total: f64 },
}

pub fn view(state: &CartState) -> CartView {
    if state.items.is_empty() {
        return CartView::Empty {
            title: "Your Shopping Cart is Empty".to_string(),
            subtitle: "Add some products to continue.".to_string(),
        };
    }

    let rows: Vec<CartRow> = state
        .items
        .iter()
        .map(|item| {
            let line_total = (item.price * f64::from(item.quantity) - item.discount).max(0.0);
            CartRow {
                id: item.id.value(),
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
                discount: item.discount,
                line_total,
            }
        })
        .collect();
    let total = rows.iter().map(|row| row.line_total).sum();
    CartView::Items { rows, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data;

    #[test]
    fn test_empty_cart_renders_placeholder() {
        let v = view(&CartState::default());
        match v {
            CartView::Empty { title, subtitle } => {
                assert_eq!(title, "Your Shopping Cart is Empty");
                assert_eq!(subtitle, "Add some products to continue.");
            }
            CartView::Items { .. } => panic!("expected empty cart view"),
        }
    }

    #[test]
    fn test_line_totals_and_grand_total() {
        let state = CartState {
            items: data::sample_cart_items(),
        };
        match view(&state) {
            CartView::Items { rows, total } => {
                assert_eq!(rows.len(), 3);
                // 790 * 2 = 1580; 1650 - 150 = 1500; 1250.
                assert_eq!(rows[0].line_total, 1580.0);
                assert_eq!(rows[1].line_total, 1500.0);
                assert_eq!(total, 1580.0 + 1500.0 + 1250.0);
            }
            CartView::Empty { .. } => panic!("expected cart rows"),
        }
    }

    #[test]
    fn test_discount_never_drives_line_below_zero() {
        let state = CartState {
            items: vec![CartItem::new(9, "Sampler", "promo", 100.0, 1, "img", 500.0)],
        };
        match view(&state) {
            CartView::Items { rows, .. } => assert_eq!(rows[0].line_total, 0.0),
            CartView::Empty { .. } => panic!("expected cart rows"),
        }
    }
}
