//! Корневой back stack приложения.
//!
//! Стартует как `[splash]`. Splash авто-переход заменяет верхний элемент
//! (назад на splash вернуться нельзя); остальные переходы - обычные
//! push/pop. Tab-маршруты корневой стек не трогают - ими занимается
//! вложенный tab host.

use crate::routes::{RouteMatch, ScreenRoute};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootNavigator {
    stack: Vec<RouteMatch>,
}

impl RootNavigator {
    pub fn new() -> Self {
        Self {
            stack: vec![RouteMatch::new(ScreenRoute::Splash)],
        }
    }

    /// Текущий (верхний) элемент стека.
    pub fn current(&self) -> RouteMatch {
        // Стек никогда не пуст: pop ниже не снимает последний элемент,
        // а replace кладёт новый на место верхнего.
        *self.stack.last().expect("root stack is never empty")
    }

    pub fn stack(&self) -> &[RouteMatch] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Кладёт destination поверх стека.
    pub fn push(&mut self, entry: RouteMatch) {
        tracing::debug!(route = entry.route.name(), "root push");
        self.stack.push(entry);
    }

    /// Заменяет верхний элемент: pop + push одним шагом. Так уходит splash -
    /// назад к нему вернуться нельзя.
    pub fn replace_current(&mut self, entry: RouteMatch) {
        tracing::debug!(
            from = self.current().route.name(),
            to = entry.route.name(),
            "root replace"
        );
        self.stack.pop();
        self.stack.push(entry);
    }

    /// Снимает верхний элемент. На дне стека - no-op (выход из процесса
    /// вне зоны ответственности ядра).
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop();
        tracing::debug!(
            route = popped.map(|e| e.route.name()).unwrap_or(""),
            "root pop"
        );
        true
    }
}

impl Default for RootNavigator {
    fn default() -> Self {
        Self::new()
    }
}
