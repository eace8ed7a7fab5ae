//! Static navigation tree and the route tables derived from it

use once_cell::sync::Lazy;

use crate::domain::models::{NavNode, PageRef, RouteTable};
use crate::shared::constants::BASIC_LAYOUT;
use crate::shared::logging::log_missing_route_table;
use crate::shared::routing::route_table_for_layout;

static NAV_DATA: Lazy<Vec<NavNode>> = Lazy::new(|| {
    vec![
        NavNode::new("")
            .name("Home")
            .layout(BASIC_LAYOUT)
            .children(vec![
                NavNode::new("dashboard")
                    .name("Dashboard")
                    .icon("dashboard")
                    .children(vec![
                        NavNode::new("analysis")
                            .name("Analysis")
                            .component(PageRef::Analysis),
                        NavNode::new("table-list")
                            .name("Table List")
                            .component(PageRef::TableList),
                    ]),
                NavNode::new("exception")
                    .name("Exception")
                    .icon("warning")
                    .children(vec![
                        NavNode::new("404")
                            .name("404")
                            .component(PageRef::NotFound),
                    ]),
                // Reachable by URL only
                NavNode::new("profile/:id").component(PageRef::Profile),
                NavNode::new("https://pro.ant.design/docs/getting-started")
                    .name("Docs")
                    .key("docs")
                    .icon("book")
                    .target("_blank"),
            ]),
    ]
});

/// The navigation tree, built on first use
pub fn get_nav_data() -> &'static [NavNode] {
    &NAV_DATA
}

/// Flattened routes of the layout named `layout`
pub fn get_route_data(layout: &str) -> Option<RouteTable> {
    let table = route_table_for_layout(get_nav_data(), layout);
    if table.is_none() {
        log_missing_route_table(layout);
    }
    table
}
