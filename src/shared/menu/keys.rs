//! Selected and default-open menu keys, derived from the URL

use crate::domain::models::NavNode;

/// Top-level menu items: the children of every layout node, concatenated
pub fn top_level_menus(nav: &[NavNode]) -> Vec<NavNode> {
    nav.iter().flat_map(|layout| layout.children.iter().cloned()).collect()
}

/// Key of the first top-level item that shows in the menu
pub fn first_menu_key(menus: &[NavNode]) -> Option<String> {
    menus
        .iter()
        .find(|node| node.is_named())
        .map(|node| node.menu_key().to_string())
}

/// Keys to highlight for `pathname`.
///
/// The root URL selects the first top-level item; any other URL selects
/// its path segments, so deep links highlight the whole branch.
pub fn selected_keys(pathname: &str, menus: &[NavNode]) -> Vec<String> {
    let keys: Vec<String> = pathname.split('/').skip(1).map(str::to_string).collect();
    if keys.len() == 1 && keys[0].is_empty() {
        return first_menu_key(menus).into_iter().collect();
    }
    keys
}

/// Groups expanded on first render: every selected key but the leaf
pub fn default_open_keys(pathname: &str, menus: &[NavNode], fallback: &str) -> Vec<String> {
    let mut keys = selected_keys(pathname, menus);
    keys.pop();
    if keys.is_empty() {
        return vec![fallback.to_string()];
    }
    keys
}
