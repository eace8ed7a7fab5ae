use crate::domain::models::NavNode;
use crate::shared::logging::log_menu_built;

use super::keys::{default_open_keys, selected_keys, top_level_menus};
use super::open_keys::OpenKeys;
use super::tree::{build_menu, MenuItem};

/// Menu state owned by the layout for its whole lifetime.
///
/// Built once from the navigation tree and the URL at mount time; after
/// that only open/close events change it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    menus: Vec<NavNode>,
    open_keys: OpenKeys,
}

impl LayoutController {
    pub fn new(nav: &[NavNode], pathname: &str, fallback_open_key: &str) -> Self {
        let menus = top_level_menus(nav);
        let open_keys = OpenKeys::new(default_open_keys(pathname, &menus, fallback_open_key));
        Self { menus, open_keys }
    }

    pub fn menu_items(&self, pathname: &str) -> Vec<MenuItem> {
        let items = build_menu(&self.menus, "", pathname);
        log_menu_built(pathname, items.len());
        items
    }

    pub fn selected_keys(&self, pathname: &str) -> Vec<String> {
        selected_keys(pathname, &self.menus)
    }

    pub fn open_keys(&self, collapsed: bool) -> Vec<String> {
        self.open_keys.visible(collapsed).to_vec()
    }

    pub fn on_open_change(&mut self, candidate: Vec<String>) {
        self.open_keys.on_open_change(candidate, &self.menus);
    }

    /// Submenu title clicked. Ignored while collapsed, where open groups
    /// are hidden and a click would change state the user cannot see.
    pub fn toggle_group(&mut self, key: &str, collapsed: bool) {
        if collapsed {
            return;
        }
        let candidate = self.open_keys.toggle_candidate(key);
        self.on_open_change(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<NavNode> {
        vec![NavNode::new("").layout("BasicLayout").children(vec![
            NavNode::new("dashboard").name("Dashboard").children(vec![
                NavNode::new("analysis").name("Analysis"),
                NavNode::new("reports").name("Reports").children(vec![
                    NavNode::new("monthly").name("Monthly"),
                ]),
            ]),
            NavNode::new("exception").name("Exception").children(vec![
                NavNode::new("404").name("404"),
            ]),
        ])]
    }

    #[test]
    fn test_initial_open_keys_follow_url() {
        let controller = LayoutController::new(&nav(), "/exception/404", "dashboard");
        assert_eq!(controller.open_keys(false), vec!["exception"]);
        assert_eq!(controller.selected_keys("/exception/404"), vec!["exception", "404"]);
    }

    #[test]
    fn test_initial_open_keys_use_fallback_at_root() {
        let controller = LayoutController::new(&nav(), "/", "dashboard");
        assert_eq!(controller.open_keys(false), vec!["dashboard"]);
        assert_eq!(controller.selected_keys("/"), vec!["dashboard"]);
    }

    #[test]
    fn test_toggle_group_accordion() {
        let mut controller = LayoutController::new(&nav(), "/dashboard/analysis", "dashboard");
        controller.toggle_group("reports", false);
        assert_eq!(controller.open_keys(false), vec!["dashboard", "reports"]);

        controller.toggle_group("exception", false);
        assert_eq!(controller.open_keys(false), vec!["exception"]);

        controller.toggle_group("exception", false);
        assert!(controller.open_keys(false).is_empty());
    }

    #[test]
    fn test_toggle_group_ignored_while_collapsed() {
        let mut controller = LayoutController::new(&nav(), "/dashboard/analysis", "dashboard");
        controller.toggle_group("exception", true);
        controller.toggle_group("reports", true);

        assert!(controller.open_keys(true).is_empty());
        assert_eq!(controller.open_keys(false), vec!["dashboard"]);
    }

    #[test]
    fn test_collapsed_sidebar_shows_no_open_keys() {
        let controller = LayoutController::new(&nav(), "/dashboard/analysis", "dashboard");
        assert!(controller.open_keys(true).is_empty());
        assert_eq!(controller.open_keys(false), vec!["dashboard"]);
    }

    #[test]
    fn test_menu_items_are_top_level_children() {
        let controller = LayoutController::new(&nav(), "/", "dashboard");
        let keys: Vec<_> = controller
            .menu_items("/")
            .iter()
            .map(|item| item.key().to_string())
            .collect();
        assert_eq!(keys, vec!["dashboard", "exception"]);
    }
}
