//! Tab host главного шелла.
//!
//! Четыре равноправных таба в фиксированном порядке; Home - стартовый.
//! Вложенный стек держится в форме `[home]` либо `[home, другой]`:
//! назад с любого не-стартового таба возвращает на Home, повторный выбор
//! активного таба - no-op (дубликаты в стеке не копятся).

use serde::{Deserialize, Serialize};

use crate::routes::ScreenRoute;

// ============================================================================
// Tab Keys
// ============================================================================

/// Ключи табов нижней навигации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKey {
    Home,
    Products,
    Cart,
    Profile,
}

impl TabKey {
    /// Табы в порядке отображения.
    pub const ALL: [TabKey; 4] = [TabKey::Home, TabKey::Products, TabKey::Cart, TabKey::Profile];

    /// Стартовый таб шелла.
    pub const START: TabKey = TabKey::Home;

    /// Читаемый заголовок таба - единственный источник правды для шелла.
    pub fn label(&self) -> &'static str {
        match self {
            TabKey::Home => "Home",
            TabKey::Products => "Products",
            TabKey::Cart => "Cart",
            TabKey::Profile => "Profile",
        }
    }

    /// Ключ, под которым сохраняется состояние таба.
    pub fn form_key(&self) -> &'static str {
        match self {
            TabKey::Home => "tab_home",
            TabKey::Products => "tab_products",
            TabKey::Cart => "tab_cart",
            TabKey::Profile => "tab_profile",
        }
    }

    /// Маршрут таблицы маршрутов, которому соответствует таб.
    pub fn route(&self) -> ScreenRoute {
        match self {
            TabKey::Home => ScreenRoute::Home,
            TabKey::Products => ScreenRoute::Products,
            TabKey::Cart => ScreenRoute::Cart,
            TabKey::Profile => ScreenRoute::Profile,
        }
    }

    /// Обратное сопоставление: tab-маршрут -> таб.
    pub fn from_route(route: ScreenRoute) -> Option<TabKey> {
        match route {
            ScreenRoute::Home => Some(TabKey::Home),
            ScreenRoute::Products => Some(TabKey::Products),
            ScreenRoute::Cart => Some(TabKey::Cart),
            ScreenRoute::Profile => Some(TabKey::Profile),
            _ => None,
        }
    }
}

// ============================================================================
// Tab Host
// ============================================================================

/// Результат выбора таба. `Switched.from` нужен вызывающей стороне, чтобы
/// сохранить состояние уходящего таба.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    /// Повторный выбор активного таба: стек и состояние не трогаем.
    Unchanged,
    Switched { from: TabKey },
}

/// Вложенный навигатор шелла.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHost {
    active: TabKey,
    stack: Vec<TabKey>,
}

impl TabHost {
    pub fn new() -> Self {
        Self {
            active: TabKey::START,
            stack: vec![TabKey::START],
        }
    }

    pub fn active(&self) -> TabKey {
        self.active
    }

    pub fn stack(&self) -> &[TabKey] {
        &self.stack
    }

    /// Переключает активный таб.
    pub fn select(&mut self, tab: TabKey) -> TabSelection {
        if tab == self.active {
            return TabSelection::Unchanged;
        }
        let from = self.active;
        self.active = tab;
        // Стек не растёт: старт + максимум один не-стартовый таб.
        self.stack = if tab == TabKey::START {
            vec![TabKey::START]
        } else {
            vec![TabKey::START, tab]
        };
        TabSelection::Switched { from }
    }

    /// Назад внутри шелла: с не-стартового таба возвращает на Home.
    /// `None` - активен стартовый таб, событие шелл не обрабатывает.
    pub fn back(&mut self) -> Option<TabSelection> {
        if self.active == TabKey::START {
            return None;
        }
        Some(self.select(TabKey::START))
    }
}

impl Default for TabHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let host = TabHost::new();
        assert_eq!(host.active(), TabKey::Home);
        assert_eq!(host.stack(), &[TabKey::Home]);
    }

    #[test]
    fn test_reselecting_active_tab_is_noop() {
        let mut host = TabHost::new();
        assert_eq!(host.select(TabKey::Home), TabSelection::Unchanged);
        assert_eq!(host.stack(), &[TabKey::Home]);

        host.select(TabKey::Cart);
        assert_eq!(host.select(TabKey::Cart), TabSelection::Unchanged);
        assert_eq!(host.stack(), &[TabKey::Home, TabKey::Cart]);
    }

    #[test]
    fn test_switching_reports_outgoing_tab() {
        let mut host = TabHost::new();
        assert_eq!(
            host.select(TabKey::Products),
            TabSelection::Switched { from: TabKey::Home }
        );
        assert_eq!(
            host.select(TabKey::Profile),
            TabSelection::Switched { from: TabKey::Products }
        );
        // Дубликаты не копятся: стек всегда [home] или [home, другой].
        assert_eq!(host.stack(), &[TabKey::Home, TabKey::Profile]);
    }

    #[test]
    fn test_back_returns_to_home() {
        let mut host = TabHost::new();
        host.select(TabKey::Cart);
        assert_eq!(
            host.back(),
            Some(TabSelection::Switched { from: TabKey::Cart })
        );
        assert_eq!(host.active(), TabKey::Home);
        assert_eq!(host.back(), None);
    }

    #[test]
    fn test_tab_route_round_trip() {
        for tab in TabKey::ALL {
            assert_eq!(TabKey::from_route(tab.route()), Some(tab));
        }
        assert_eq!(TabKey::from_route(ScreenRoute::Splash), None);
    }
}
