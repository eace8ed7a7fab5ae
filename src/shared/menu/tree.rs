//! Navigation tree to menu items
//!
//! The variant of every item is decided here, once, so the sidebar only
//! has to match on it.

use crate::domain::models::NavNode;
use crate::shared::routing::HistoryMode;
use crate::shared::utils::{is_absolute_url, is_external_path, join_path};

/// One renderable sidebar entry
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Expandable submenu
    Group {
        key: String,
        title: String,
        icon: Option<String>,
        children: Vec<MenuItem>,
    },
    /// Link to an application route
    Leaf {
        key: String,
        name: String,
        icon: Option<String>,
        path: String,
        target: Option<String>,
        /// Replace for a link to the current page, push otherwise
        history: HistoryMode,
    },
    /// Link leaving the application
    ExternalLink {
        key: String,
        name: String,
        icon: Option<String>,
        href: String,
        target: Option<String>,
    },
}

impl MenuItem {
    pub fn key(&self) -> &str {
        match self {
            MenuItem::Group { key, .. }
            | MenuItem::Leaf { key, .. }
            | MenuItem::ExternalLink { key, .. } => key,
        }
    }
}

/// Build the menu for `nodes`, resolving paths against `parent_path`.
///
/// Nameless nodes are dropped together with their subtree.
pub fn build_menu(nodes: &[NavNode], parent_path: &str, current_path: &str) -> Vec<MenuItem> {
    nodes
        .iter()
        .filter_map(|node| build_item(node, parent_path, current_path))
        .collect()
}

fn build_item(node: &NavNode, parent_path: &str, current_path: &str) -> Option<MenuItem> {
    let name = node.name.as_ref()?;
    let key = node.menu_key().to_string();

    let item_path = if is_external_path(&node.path) {
        node.path.clone()
    } else {
        join_path(parent_path, &node.path)
    };

    if node.has_named_children() {
        return Some(MenuItem::Group {
            key,
            title: name.clone(),
            icon: node.icon.clone(),
            children: build_menu(&node.children, &item_path, current_path),
        });
    }

    if is_absolute_url(&item_path) {
        return Some(MenuItem::ExternalLink {
            key,
            name: name.clone(),
            icon: node.icon.clone(),
            href: item_path,
            target: node.target.clone(),
        });
    }

    let history = HistoryMode::for_target(&item_path, current_path);
    Some(MenuItem::Leaf {
        key,
        name: name.clone(),
        icon: node.icon.clone(),
        path: item_path,
        target: node.target.clone(),
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NavNode> {
        vec![
            NavNode::new("dashboard").name("Dashboard").icon("dashboard").children(vec![
                NavNode::new("analysis").name("Analysis"),
                NavNode::new("table-list").name("Table List"),
                NavNode::new("hidden").children(vec![NavNode::new("deep").name("Deep")]),
            ]),
            NavNode::new("profile/:id"),
            NavNode::new("https://github.com/ant-design/ant-design-pro")
                .name("GitHub")
                .key("github")
                .target("_blank"),
        ]
    }

    fn collect_keys(items: &[MenuItem], out: &mut Vec<String>) {
        for item in items {
            out.push(item.key().to_string());
            if let MenuItem::Group { children, .. } = item {
                collect_keys(children, out);
            }
        }
    }

    #[test]
    fn test_nameless_nodes_and_subtrees_are_omitted() {
        let items = build_menu(&sample(), "", "/");
        let mut keys = Vec::new();
        collect_keys(&items, &mut keys);

        assert_eq!(keys, vec!["dashboard", "analysis", "table-list", "github"]);
        assert!(!keys.iter().any(|k| k == "hidden" || k == "deep" || k == "profile/:id"));
    }

    #[test]
    fn test_group_children_get_joined_paths() {
        let items = build_menu(&sample(), "", "/");
        let MenuItem::Group { children, title, .. } = &items[0] else {
            panic!("dashboard should be a group");
        };
        assert_eq!(title, "Dashboard");

        let paths: Vec<_> = children
            .iter()
            .filter_map(|c| match c {
                MenuItem::Leaf { path, .. } => Some(path.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(paths, vec!["/dashboard/analysis", "/dashboard/table-list"]);
    }

    #[test]
    fn test_external_link_keeps_url_and_target() {
        let items = build_menu(&sample(), "/ignored/", "/");
        match &items[1] {
            MenuItem::ExternalLink { href, target, key, .. } => {
                assert_eq!(href, "https://github.com/ant-design/ant-design-pro");
                assert_eq!(target.as_deref(), Some("_blank"));
                assert_eq!(key, "github");
            }
            other => panic!("expected external link, got {:?}", other),
        }
    }

    #[test]
    fn test_current_path_uses_replace() {
        let items = build_menu(&sample(), "", "/dashboard/analysis");
        let MenuItem::Group { children, .. } = &items[0] else {
            panic!("dashboard should be a group");
        };
        let modes: Vec<HistoryMode> = children
            .iter()
            .filter_map(|c| match c {
                MenuItem::Leaf { history, .. } => Some(*history),
                _ => None,
            })
            .collect();
        assert_eq!(modes, vec![HistoryMode::Replace, HistoryMode::Push]);
    }

    #[test]
    fn test_node_with_only_structural_children_is_leaf() {
        let nodes = vec![
            NavNode::new("/list/").name("List").children(vec![NavNode::new(":id")]),
        ];
        let items = build_menu(&nodes, "/", "/");
        assert_eq!(
            items,
            vec![MenuItem::Leaf {
                key: "/list/".to_string(),
                name: "List".to_string(),
                icon: None,
                path: "/list/".to_string(),
                target: None,
                history: HistoryMode::Push,
            }]
        );
    }
}
