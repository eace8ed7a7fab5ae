use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::nav::PageRef;

/// Parameters captured from `:name` pattern segments
pub type RouteParams = BTreeMap<String, String>;

/// One flattened route: a path pattern and the page it renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub exact: bool,
    pub component: PageRef,
}

/// Ordered route list; the first matching entry wins
pub type RouteTable = Vec<RouteEntry>;
