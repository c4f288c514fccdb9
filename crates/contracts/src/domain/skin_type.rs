use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;

/// Плитка "тип кожи" на домашнем экране.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinType {
    pub id: i32,
    pub name: String,
    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,
}

impl SkinType {
    pub fn new(id: i32, name: &str, image_ref: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_ref: ImageRef::new(image_ref),
        }
    }
}
