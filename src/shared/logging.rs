//! Structured logging module for the admin shell
//!
//! Provides consistent, contextual logging across the layout, router and
//! admin client. Every event carries an `operation` field.

/// Logged operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuBuild,
    RouteDispatch,
    OpenKeys,
    LayoutCollapse,
    UserFetch,
    AdminRequest,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuBuild => "menu_build",
            LogOperation::RouteDispatch => "route_dispatch",
            LogOperation::OpenKeys => "open_keys",
            LogOperation::LayoutCollapse => "layout_collapse",
            LogOperation::UserFetch => "user_fetch",
            LogOperation::AdminRequest => "admin_request",
        }
    }
}

/// Log the size of a freshly built menu
pub fn log_menu_built(pathname: &str, top_level_items: usize) {
    tracing::trace!(
        operation = LogOperation::MenuBuild.as_str(),
        pathname = pathname,
        top_level_items = top_level_items,
        "Menu built"
    );
}

/// Log the outcome of matching a URL against the route table
pub fn log_route_dispatch(pathname: &str, outcome: &str) {
    tracing::debug!(
        operation = LogOperation::RouteDispatch.as_str(),
        pathname = pathname,
        outcome = outcome,
        "Route dispatched"
    );
}

/// Log a route table that could not be found for a layout
pub fn log_missing_route_table(layout: &str) {
    tracing::warn!(
        operation = LogOperation::RouteDispatch.as_str(),
        layout = layout,
        "No route table for layout"
    );
}

/// Log a menu path that does not parse as an application route
pub fn log_unroutable_path(path: &str) {
    tracing::warn!(
        operation = LogOperation::RouteDispatch.as_str(),
        path = path,
        "Path is not a known application route"
    );
}

/// Log an open-keys transition
pub fn log_open_keys_change(candidate: &[String], result: &[String], accordion: bool) {
    tracing::debug!(
        operation = LogOperation::OpenKeys.as_str(),
        candidate = ?candidate,
        result = ?result,
        accordion = accordion,
        "Open keys changed"
    );
}

/// Log a sidebar collapse toggle
pub fn log_collapse_toggle(collapsed: bool, resize_delay_ms: u32) {
    tracing::debug!(
        operation = LogOperation::LayoutCollapse.as_str(),
        collapsed = collapsed,
        resize_delay_ms = resize_delay_ms,
        "Sidebar collapse toggled"
    );
}

/// Log the viewport crossing the mobile breakpoint
pub fn log_breakpoint_change(screen: &str, mobile: bool) {
    tracing::debug!(
        operation = LogOperation::LayoutCollapse.as_str(),
        screen = screen,
        collapsed = mobile,
        "Viewport breakpoint changed"
    );
}

/// Log current user fetch start
pub fn log_user_fetch_start() {
    tracing::debug!(
        operation = LogOperation::UserFetch.as_str(),
        "Fetching current user"
    );
}

/// Log current user fetch success
pub fn log_user_fetch_success(name: Option<&str>) {
    tracing::info!(
        operation = LogOperation::UserFetch.as_str(),
        user = name.unwrap_or("<anonymous>"),
        "Current user loaded"
    );
}

/// Log current user fetch failure
pub fn log_user_fetch_error(error: &str) {
    tracing::error!(
        operation = LogOperation::UserFetch.as_str(),
        error = error,
        "Failed to fetch current user"
    );
}

/// Log an outgoing admin request
pub fn log_admin_request(method: &str, url: &str) {
    tracing::debug!(
        operation = LogOperation::AdminRequest.as_str(),
        method = method,
        url = url,
        "Sending admin request"
    );
}

/// Log a failed admin request
pub fn log_admin_request_error(method: &str, url: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::AdminRequest.as_str(),
        method = method,
        url = url,
        error = error,
        "Admin request failed"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($layout:expr) => {
        tracing::info_span!("admin_shell", layout = $layout)
    };
    ($layout:expr, $pathname:expr) => {
        tracing::info_span!("admin_shell", layout = $layout, pathname = $pathname)
    };
}
