//! Экран регистрации.
//!
//! Форма из трёх полей и чекбокса условий. Кнопка Register активна только
//! при согласии с условиями и действия не выполняет (прототип). Состояние
//! живёт, пока register-запись находится в корневом стеке.

use serde::{Deserialize, Serialize};

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterState {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "agreedToTerms")]
    pub agreed_to_terms: bool,
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterView {
    pub title: String,
    pub heading: String,
    pub name: String,
    pub email: String,
    /// Пароль наружу не отдаётся - только маска той же длины.
    pub masked_password: String,
    pub agreed_to_terms: bool,
    pub submit_enabled: bool,
}

pub fn view(state: &RegisterState) -> RegisterView {
    RegisterView {
        title: "Create Account".to_string(),
        heading: "Join Dreamy Bloom".to_string(),
        name: state.name.clone(),
        email: state.email.clone(),
        masked_password: "•".repeat(state.password.chars().count()),
        agreed_to_terms: state.agreed_to_terms,
        submit_enabled: state.agreed_to_terms,
    }
}
