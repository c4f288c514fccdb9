//! Экран входа.
//!
//! Логики аутентификации нет: обе кнопки - просто корневые навигации.
//! View-model несёт пути, по которым шелл разрешает переходы.

use contracts::domain::ImageRef;
use serde::{Deserialize, Serialize};

use crate::routes::ScreenRoute;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginView {
    pub logo: ImageRef,
    pub title: String,
    /// Путь перехода по кнопке "Login" (в главный шелл).
    pub login_path: String,
    /// Путь перехода по кнопке "Register".
    pub register_path: String,
}

pub fn view() -> LoginView {
    LoginView {
        logo: ImageRef::new("dreamy_bloom_logo"),
        title: "DREAMY BLOOM".to_string(),
        login_path: ScreenRoute::Home.template().to_string(),
        register_path: ScreenRoute::Register.template().to_string(),
    }
}
