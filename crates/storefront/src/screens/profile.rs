//! Таб профиля: данные пользователя, статус и меню.
//!
//! Пункты меню несут пути для route table; незарегистрированные пути
//! ("edit_profile_route" и прочие) при переходе остаются no-op.

use contracts::domain::{ProfileMenuEntry, UserInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub title: String,
    pub user: UserInfo,
    pub status_line: String,
    pub menu: Vec<ProfileMenuEntry>,
}

pub fn view(user: &UserInfo, menu: &[ProfileMenuEntry]) -> ProfileView {
    ProfileView {
        title: "Profile".to_string(),
        user: user.clone(),
        status_line: "● Active status".to_string(),
        menu: menu.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteTable, ScreenRoute};
    use crate::shared::data;

    #[test]
    fn test_view_carries_user_and_menu() {
        let v = view(&data::user_info(), &data::profile_menu());
        assert_eq!(v.user.name, "Darlene Robertson");
        assert_eq!(v.menu.len(), 6);
        assert_eq!(v.status_line, "● Active status");
    }

    #[test]
    fn test_only_order_history_resolves() {
        let table = RouteTable::new();
        let v = view(&data::user_info(), &data::profile_menu());
        let resolved: Vec<_> = v
            .menu
            .iter()
            .filter_map(|entry| table.resolve(&entry.route))
            .collect();
        // Единственный зарегистрированный путь меню - home ("Order History").
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].route, ScreenRoute::Home);
    }
}
