//! Splash-экран: статичный логотип + имя приложения.
//!
//! Авто-переход на login планирует runtime шелла, не экран.

use contracts::domain::ImageRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashView {
    pub logo: ImageRef,
    pub app_name: String,
}

pub fn view(app_title: &str) -> SplashView {
    SplashView {
        logo: ImageRef::new("dreamy_bloom_logo"),
        app_name: app_title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_carries_configured_title() {
        let v = view("Dreamy Bloom");
        assert_eq!(v.app_name, "Dreamy Bloom");
        assert_eq!(v.logo.key(), "dreamy_bloom_logo");
    }
}
