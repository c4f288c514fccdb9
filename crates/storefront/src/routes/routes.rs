//! Таблица маршрутов приложения.
//!
//! Набор destinations фиксирован и не меняется в runtime. Единственный
//! параметризованный шаблон - карточка товара: целочисленный `productId`
//! со значением по умолчанию 0 (отсутствует или не парсится).

use serde::{Deserialize, Serialize};

/// Сегмент-placeholder единственного типизированного параметра.
const PRODUCT_ID_PARAM: &str = "{productId}";

// ============================================================================
// Screen Routes
// ============================================================================

/// Именованные навигационные destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenRoute {
    Splash,
    Login,
    Register,
    Home,
    Products,
    Cart,
    Profile,
    ProductDetail,
}

impl ScreenRoute {
    /// Все маршруты в порядке регистрации.
    pub const ALL: [ScreenRoute; 8] = [
        ScreenRoute::Splash,
        ScreenRoute::Login,
        ScreenRoute::Register,
        ScreenRoute::Home,
        ScreenRoute::Products,
        ScreenRoute::Cart,
        ScreenRoute::Profile,
        ScreenRoute::ProductDetail,
    ];

    /// Уникальный ключ маршрута.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenRoute::Splash => "splash",
            ScreenRoute::Login => "login",
            ScreenRoute::Register => "register",
            ScreenRoute::Home => "home",
            ScreenRoute::Products => "products",
            ScreenRoute::Cart => "cart",
            ScreenRoute::Profile => "profile",
            ScreenRoute::ProductDetail => "product_detail",
        }
    }

    /// Шаблон пути ("wire protocol" навигации).
    pub fn template(&self) -> &'static str {
        match self {
            ScreenRoute::Splash => "splash_screen",
            ScreenRoute::Login => "login_screen",
            ScreenRoute::Register => "register_screen",
            ScreenRoute::Home => "home_screen",
            ScreenRoute::Products => "product_screen",
            ScreenRoute::Cart => "cart_screen",
            ScreenRoute::Profile => "profile_screen",
            ScreenRoute::ProductDetail => "product_detail_screen/{productId}",
        }
    }

    /// Tab-маршруты шелла обрабатываются вложенным навигатором, а не
    /// корневым стеком.
    pub fn is_tab_route(&self) -> bool {
        matches!(
            self,
            ScreenRoute::Home | ScreenRoute::Products | ScreenRoute::Cart | ScreenRoute::Profile
        )
    }
}

/// Строит путь карточки товара для переданного id.
pub fn product_detail_path(product_id: i32) -> String {
    format!("product_detail_screen/{}", product_id)
}

// ============================================================================
// Resolution
// ============================================================================

/// Типизированные параметры, связанные из пути.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteParams {
    #[serde(rename = "productId")]
    pub product_id: i32,
}

/// Результат разрешения пути: маршрут + связанные параметры.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route: ScreenRoute,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn new(route: ScreenRoute) -> Self {
        Self {
            route,
            params: RouteParams::default(),
        }
    }

    pub fn with_product_id(route: ScreenRoute, product_id: i32) -> Self {
        Self {
            route,
            params: RouteParams { product_id },
        }
    }
}

/// Статическая таблица маршрутов.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<ScreenRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: ScreenRoute::ALL.to_vec(),
        }
    }

    /// Разрешает запрошенный путь по зарегистрированным шаблонам.
    ///
    /// Незнакомый путь даёт `None`; реакция (no-op с предупреждением) -
    /// на вызывающей стороне.
    pub fn resolve(&self, requested_path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            match_template(route.template(), requested_path)
                .map(|params| RouteMatch { route: *route, params })
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Сопоставляет путь с шаблоном посегментно.
///
/// Параметр-сегмент связывает i32: непарсящееся значение и отсутствующий
/// хвостовой сегмент дают значение по умолчанию 0.
fn match_template(template: &str, path: &str) -> Option<RouteParams> {
    let mut params = RouteParams::default();
    let mut path_segments = path.split('/');

    for template_segment in template.split('/') {
        match path_segments.next() {
            Some(segment) if template_segment == PRODUCT_ID_PARAM => {
                params.product_id = segment.parse().unwrap_or(0);
            }
            Some(segment) if segment == template_segment => {}
            Some(_) => return None,
            // Хвостовой параметр может отсутствовать целиком.
            None if template_segment == PRODUCT_ID_PARAM => {}
            None => return None,
        }
    }

    if path_segments.next().is_some() {
        return None;
    }
    Some(params)
}
