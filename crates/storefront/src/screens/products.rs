//! Таб "Products": листинг всех секций каталога.
//!
//! Локального состояния нет - view строится целиком из каталога. Строки
//! несут путь карточки товара для параметризованного перехода.

use contracts::catalog::Catalog;
use contracts::domain::{ImageRef, Product};
use serde::{Deserialize, Serialize};

use crate::routes::product_detail_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: String,
    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,
    pub detail_path: String,
}

impl ProductRow {
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
pub struct SectionView {
    pub label: String,
    pub rows: Vec<ProductRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsView {
    pub title: String,
    pub sections: Vec<SectionView>,
}

pub fn view(catalog: &Catalog) -> ProductsView {
    ProductsView {
        title: "All Products".to_string(),
        sections: catalog
            .sections()
            .iter()
            .map(|section| SectionView {
                label: section.label.clone(),
                rows: section.products.iter().map(ProductRow::from_product).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteTable, ScreenRoute};
    use crate::shared::data;

    #[test]
    fn test_sections_follow_catalog_order() {
        let catalog = data::seed_catalog().unwrap();
        let v = view(&catalog);
        assert_eq!(v.title, "All Products");
        assert_eq!(v.sections.len(), catalog.sections().len());
        assert_eq!(v.sections[0].label, "Anti-Aging Solutions");
        assert_eq!(v.sections[4].label, "Body Care Daily");
    }

    #[test]
    fn test_rows_resolve_to_detail_route() {
        let catalog = data::seed_catalog().unwrap();
        let table = RouteTable::new();
        let v = view(&catalog);
        let row = &v.sections[0].rows[0];
        let matched = table.resolve(&row.detail_path).unwrap();
        assert_eq!(matched.route, ScreenRoute::ProductDetail);
        assert_eq!(matched.params.product_id, row.id);
    }
}
