//! Flatten navigation nodes into an ordered route table

use crate::domain::models::{NavNode, RouteEntry, RouteTable};
use crate::shared::utils::join_path;

/// Flatten `nodes` into routes, resolving paths against `parent_path`.
///
/// A node with children and no page is only a prefix: its children are
/// flattened in its place. A node with both children and a page matches
/// its whole subtree (non-exact). Leaves match exactly; leaves without a
/// page (external links) are not routable and are skipped.
pub fn flatten_routes(nodes: &[NavNode], parent_path: &str) -> RouteTable {
    let mut table = Vec::new();
    for node in nodes {
        let path = join_path(parent_path, &node.path);
        match (node.children.is_empty(), node.component) {
            (false, None) => table.extend(flatten_routes(&node.children, &path)),
            (false, Some(component)) => table.push(RouteEntry {
                path,
                exact: false,
                component,
            }),
            (true, Some(component)) => table.push(RouteEntry {
                path,
                exact: true,
                component,
            }),
            (true, None) => {
                tracing::trace!(path = %path, "Skipping nav leaf without a page");
            }
        }
    }
    table
}

/// Route table for the layout node named `layout`
pub fn route_table_for_layout(nav: &[NavNode], layout: &str) -> Option<RouteTable> {
    let layout_node = nav
        .iter()
        .find(|node| node.layout.as_deref() == Some(layout))?;
    if layout_node.children.is_empty() {
        return None;
    }
    Some(flatten_routes(&layout_node.children, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PageRef;

    fn nav() -> Vec<NavNode> {
        vec![
            NavNode::new("/").layout("BasicLayout").name("Home").children(vec![
                NavNode::new("dashboard").name("Dashboard").children(vec![
                    NavNode::new("analysis").name("Analysis").component(PageRef::Analysis),
                    NavNode::new("/table-list/").name("Table").component(PageRef::TableList),
                ]),
                NavNode::new("profile/:id").component(PageRef::Profile).children(vec![
                    NavNode::new("detail").name("Detail"),
                ]),
                NavNode::new("https://ant.design").name("Docs"),
            ]),
            NavNode::new("user").layout("UserLayout"),
        ]
    }

    #[test]
    fn test_flatten_basic_layout() {
        let table = route_table_for_layout(&nav(), "BasicLayout").unwrap();
        assert_eq!(
            table,
            vec![
                RouteEntry {
                    path: "/dashboard/analysis".to_string(),
                    exact: true,
                    component: PageRef::Analysis,
                },
                RouteEntry {
                    path: "/dashboard/table-list/".to_string(),
                    exact: true,
                    component: PageRef::TableList,
                },
                RouteEntry {
                    path: "/profile/:id".to_string(),
                    exact: false,
                    component: PageRef::Profile,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_or_empty_layout_has_no_table() {
        assert!(route_table_for_layout(&nav(), "MissingLayout").is_none());
        assert!(route_table_for_layout(&nav(), "UserLayout").is_none());
    }
}
