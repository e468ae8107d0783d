//! Navigation menu model: one entry per console area, filtered per role
//! through the route guard.

use crate::authz::{can_access_route, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/" },
    NavItem { label: "Accounts", path: "/accounts" },
    NavItem { label: "Spy Numbers", path: "/spy-numbers" },
    NavItem { label: "Campaigns", path: "/campaigns" },
    NavItem { label: "Messages", path: "/messages" },
    NavItem { label: "Entities", path: "/entities" },
    NavItem { label: "Monitoring", path: "/monitoring" },
    NavItem { label: "Administration", path: "/administration" },
];

/// The menu entries `role` may see, in declaration order.
pub fn visible_items(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| can_access_route(role, item.path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superadmin_sees_the_whole_menu() {
        assert_eq!(visible_items(Role::Superadmin).len(), NAV_ITEMS.len());
    }

    #[test]
    fn operator_menu_is_trimmed() {
        let visible = visible_items(Role::Operator);
        assert!(visible.iter().any(|item| item.path == "/"));
        assert!(visible.iter().any(|item| item.path == "/messages"));
        assert!(!visible.iter().any(|item| item.path == "/administration"));
        assert!(!visible.iter().any(|item| item.path == "/spy-numbers"));
    }
}
