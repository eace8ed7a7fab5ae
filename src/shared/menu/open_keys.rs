//! Expanded submenu state with accordion behavior for root groups

use crate::domain::models::NavNode;
use crate::shared::logging::log_open_keys_change;

/// Ordered keys of the expanded submenus
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenKeys {
    keys: Vec<String>,
}

impl OpenKeys {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Keys the sidebar should expand; nothing while collapsed
    pub fn visible(&self, collapsed: bool) -> &[String] {
        if collapsed { &[] } else { self.keys.as_slice() }
    }

    /// Candidate sequence produced by clicking the title of `key`
    pub fn toggle_candidate(&self, key: &str) -> Vec<String> {
        if self.contains(key) {
            self.keys.iter().filter(|k| *k != key).cloned().collect()
        } else {
            let mut candidate = self.keys.clone();
            candidate.push(key.to_string());
            candidate
        }
    }

    /// Apply an open-keys change.
    ///
    /// When the most recently opened key is a top-level item, only that
    /// key stays open. Nested keys are kept as given.
    pub fn on_open_change(&mut self, candidate: Vec<String>, menus: &[NavNode]) {
        let is_main_menu = candidate.last().is_some_and(|last| {
            menus
                .iter()
                .any(|item| item.key.as_deref() == Some(last.as_str()) || item.path == *last)
        });

        let next = match (is_main_menu, candidate.last()) {
            (true, Some(last)) => vec![last.clone()],
            _ => candidate.clone(),
        };
        log_open_keys_change(&candidate, &next, is_main_menu);
        self.keys = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menus() -> Vec<NavNode> {
        vec![
            NavNode::new("a").name("A"),
            NavNode::new("b").name("B"),
            NavNode::new("c-path").key("c").name("C"),
        ]
    }

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_nested_key_accumulates() {
        let mut open = OpenKeys::new(keys(&["a"]));
        open.on_open_change(keys(&["a", "x"]), &menus());
        assert_eq!(open.as_slice(), keys(&["a", "x"]));
    }

    #[test]
    fn test_root_key_collapses_to_singleton() {
        let mut open = OpenKeys::new(keys(&["a", "x", "y"]));
        open.on_open_change(keys(&["a", "x", "y", "b"]), &menus());
        assert_eq!(open.as_slice(), keys(&["b"]));

        open.on_open_change(keys(&["b"]), &menus());
        assert_eq!(open.as_slice(), keys(&["b"]));
    }

    #[test]
    fn test_root_match_uses_key_or_path() {
        let mut open = OpenKeys::new(keys(&["a"]));
        open.on_open_change(keys(&["a", "c"]), &menus());
        assert_eq!(open.as_slice(), keys(&["c"]));

        open.on_open_change(keys(&["c", "c-path"]), &menus());
        assert_eq!(open.as_slice(), keys(&["c-path"]));
    }

    #[test]
    fn test_closing_keeps_remaining_sequence() {
        let mut open = OpenKeys::new(keys(&["a", "x", "y"]));
        open.on_open_change(keys(&["a", "y"]), &menus());
        assert_eq!(open.as_slice(), keys(&["a", "y"]));

        open.on_open_change(Vec::new(), &menus());
        assert!(open.as_slice().is_empty());
    }

    #[test]
    fn test_toggle_candidate() {
        let open = OpenKeys::new(keys(&["a", "x"]));
        assert_eq!(open.toggle_candidate("x"), keys(&["a"]));
        assert_eq!(open.toggle_candidate("y"), keys(&["a", "x", "y"]));
    }

    #[test]
    fn test_collapsed_hides_open_keys() {
        let open = OpenKeys::new(keys(&["a"]));
        assert!(open.visible(true).is_empty());
        assert_eq!(open.visible(false), keys(&["a"]));
    }
}
