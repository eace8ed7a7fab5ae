//! Fixed values shared by the layout, the router and the admin client

/// Layout whose routes the dashboard shell renders
pub const BASIC_LAYOUT: &str = "BasicLayout";

/// Where `/` redirects to
pub const DEFAULT_ROUTE: &str = "/dashboard/table-list";

/// Group opened on a fresh load when the URL names no group
pub const FALLBACK_OPEN_KEY: &str = "dashboard";

/// Delay before the synthetic resize event after a collapse toggle
pub const RESIZE_NOTIFY_DELAY_MS: u32 = 600;

/// REST resource behind the admin CRUD client
pub const ADMIN_RESOURCE_PATH: &str = "/api/admin";

/// Sidebar width in pixels when expanded
pub const SIDER_WIDTH: u32 = 256;

pub const APP_TITLE: &str = "Ant Design Pro";

pub const LOGO_URL: &str = "https://gw.alipayobjects.com/zos/rmsportal/iwWyPinUoseUxIAeElSx.svg";
