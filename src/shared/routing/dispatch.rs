//! URL to page resolution over a route table

use super::history::HistoryMode;
use crate::domain::models::{RouteEntry, RouteParams, RouteTable};
use crate::shared::logging::log_route_dispatch;
use crate::shared::utils::paths::path_segments;

/// What the content area shows for a URL
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<'a> {
    /// Navigate to `to`; the root redirect always replaces
    Redirect { to: String, mode: HistoryMode },
    Render {
        entry: &'a RouteEntry,
        params: RouteParams,
    },
    NotFound,
}

impl RouteOutcome<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            RouteOutcome::Redirect { .. } => "redirect",
            RouteOutcome::Render { .. } => "render",
            RouteOutcome::NotFound => "not_found",
        }
    }
}

/// Match `pathname` against a route pattern.
///
/// Segments compare ASCII case-insensitively, `:name` segments capture
/// the value. Exact patterns need the same number of segments; other
/// patterns match any path they are a segment prefix of.
pub fn match_path(pattern: &str, pathname: &str, exact: bool) -> Option<RouteParams> {
    let pattern_segments: Vec<&str> = path_segments(pattern).collect();
    let actual_segments: Vec<&str> = path_segments(pathname).collect();

    if pattern_segments.len() > actual_segments.len() {
        return None;
    }
    if exact && pattern_segments.len() != actual_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (expected, actual) in pattern_segments.iter().zip(&actual_segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), actual.to_string());
        } else if !expected.eq_ignore_ascii_case(actual) {
            return None;
        }
    }
    Some(params)
}

/// Resolve `pathname` against `table`.
///
/// `/` always redirects to `default_route`, replacing the history entry
/// so back does not return to `/`. Otherwise the first matching
/// entry in table order wins, and no match yields `NotFound`.
pub fn dispatch<'a>(table: &'a RouteTable, pathname: &str, default_route: &str) -> RouteOutcome<'a> {
    let outcome = if pathname == "/" {
        RouteOutcome::Redirect {
            to: default_route.to_string(),
            mode: HistoryMode::Replace,
        }
    } else {
        table
            .iter()
            .find_map(|entry| {
                match_path(&entry.path, pathname, entry.exact)
                    .map(|params| RouteOutcome::Render { entry, params })
            })
            .unwrap_or(RouteOutcome::NotFound)
    };
    log_route_dispatch(pathname, outcome.label());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PageRef;

    fn table() -> RouteTable {
        vec![
            RouteEntry {
                path: "/dashboard/analysis".to_string(),
                exact: true,
                component: PageRef::Analysis,
            },
            RouteEntry {
                path: "/dashboard/table-list".to_string(),
                exact: true,
                component: PageRef::TableList,
            },
            RouteEntry {
                path: "/profile/:id".to_string(),
                exact: false,
                component: PageRef::Profile,
            },
            RouteEntry {
                path: "/profile/:id/edit".to_string(),
                exact: true,
                component: PageRef::Analysis,
            },
        ]
    }

    #[test]
    fn test_root_redirects_to_default_route() {
        let table = table();
        assert_eq!(
            dispatch(&table, "/", "/dashboard/table-list"),
            RouteOutcome::Redirect {
                to: "/dashboard/table-list".to_string(),
                mode: HistoryMode::Replace,
            }
        );
    }

    #[test]
    fn test_root_redirects_even_with_catch_all_entry() {
        let table = vec![RouteEntry {
            path: "/".to_string(),
            exact: false,
            component: PageRef::Analysis,
        }];
        assert!(matches!(
            dispatch(&table, "/", "/dashboard"),
            RouteOutcome::Redirect { mode: HistoryMode::Replace, .. }
        ));
    }

    #[test]
    fn test_exact_entry_renders() {
        let table = table();
        match dispatch(&table, "/dashboard/table-list/", "/") {
            RouteOutcome::Render { entry, params } => {
                assert_eq!(entry.component, PageRef::TableList);
                assert!(params.is_empty());
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let table = table();
        match dispatch(&table, "/profile/42/edit", "/") {
            RouteOutcome::Render { entry, params } => {
                assert_eq!(entry.component, PageRef::Profile);
                assert_eq!(params.get("id").map(String::as_str), Some("42"));
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        let table = table();
        assert_eq!(dispatch(&table, "/dashboard/missing", "/"), RouteOutcome::NotFound);
        assert_eq!(dispatch(&table, "/dashboard", "/"), RouteOutcome::NotFound);
        assert_eq!(dispatch(&table, "/dashboard/analysis/extra", "/"), RouteOutcome::NotFound);
    }

    #[test]
    fn test_match_path_is_case_insensitive() {
        assert!(match_path("/Dashboard/Analysis", "/dashboard/analysis", true).is_some());
        assert!(match_path("/dashboard", "/dashboards", false).is_none());
    }
}
