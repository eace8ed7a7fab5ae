use serde::{Deserialize, Serialize};

/// Identity of a page component reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageRef {
    Analysis,
    TableList,
    Profile,
    NotFound,
}

impl PageRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageRef::Analysis => "analysis",
            PageRef::TableList => "table-list",
            PageRef::Profile => "profile",
            PageRef::NotFound => "not-found",
        }
    }
}

impl std::fmt::Display for PageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the static navigation tree.
///
/// `path` is a segment relative to the parent node. A node without a
/// `name` is structural: it can carry routes but never shows in the menu.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavNode {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub children: Vec<NavNode>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub component: Option<PageRef>,
    /// Layout a top-level node provides routes for (e.g. `BasicLayout`)
    #[serde(default)]
    pub layout: Option<String>,
}

impl NavNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn component(mut self, page: PageRef) -> Self {
        self.component = Some(page);
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn children(mut self, children: Vec<NavNode>) -> Self {
        self.children = children;
        self
    }

    /// Menu key: explicit `key`, falling back to the raw `path`
    pub fn menu_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.path)
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// True when at least one direct child would show in the menu
    pub fn has_named_children(&self) -> bool {
        self.children.iter().any(NavNode::is_named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_key_prefers_explicit_key() {
        let node = NavNode::new("table-list").key("tables");
        assert_eq!(node.menu_key(), "tables");

        let node = NavNode::new("table-list");
        assert_eq!(node.menu_key(), "table-list");
    }

    #[test]
    fn test_has_named_children_ignores_structural_nodes() {
        let node = NavNode::new("profile").children(vec![NavNode::new(":id")]);
        assert!(!node.has_named_children());

        let node = NavNode::new("dashboard")
            .children(vec![NavNode::new(":id"), NavNode::new("analysis").name("Analysis")]);
        assert!(node.has_named_children());
    }

    #[test]
    fn test_deserialize_nav_node_defaults() {
        let json = r#"{"path":"dashboard","name":"Dashboard","children":[{"path":"analysis","component":"analysis"}]}"#;
        let node: NavNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name.as_deref(), Some("Dashboard"));
        assert!(node.icon.is_none());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].component, Some(PageRef::Analysis));
        assert!(node.children[0].children.is_empty());
    }
}
