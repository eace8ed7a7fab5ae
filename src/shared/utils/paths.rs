//! Route path helpers used by the menu renderer and the route table

use once_cell::sync::Lazy;
use regex::Regex;

static SLASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"/+").expect("valid slash regex"));

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("valid absolute url regex"));

/// Join a child segment onto its parent path, collapsing repeated `/`.
///
/// `join_path("/a/", "/b")` gives `/a/b`; `join_path("", "")` gives `/`.
pub fn join_path(parent: &str, path: &str) -> String {
    let joined = format!("{}/{}", parent, path);
    SLASH_RUNS.replace_all(&joined, "/").into_owned()
}

/// Nav paths starting with `http` are used verbatim instead of being joined
pub fn is_external_path(path: &str) -> bool {
    path.starts_with("http")
}

pub fn is_absolute_url(path: &str) -> bool {
    ABSOLUTE_URL.is_match(path)
}

/// Split a URL path into its non-empty segments
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
