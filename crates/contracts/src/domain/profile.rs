use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;

/// Жёстко заданный пользователь прототипа (аутентификации нет).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    #[serde(rename = "imageRef")]
    pub image_ref: ImageRef,
}

impl UserInfo {
    pub fn new(name: &str, email: &str, image_ref: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            image_ref: ImageRef::new(image_ref),
        }
    }
}

/// Пункт меню на экране профиля.
///
/// `route` — путь для route table. Часть пунктов прототипа ссылается на
/// маршруты, которых в таблице нет; такой переход остаётся no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMenuEntry {
    pub label: String,
    /// Ключ векторной иконки; разрешается реестром иконок на стороне рендера.
    pub icon: String,
    pub route: String,
}

impl ProfileMenuEntry {
    pub fn new(label: &str, icon: &str, route: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            route: route.to_string(),
        }
    }
}
