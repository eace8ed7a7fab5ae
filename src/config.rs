//! Shell configuration
//!
//! Defaults come from `shared::constants`; every value can be overridden
//! through an `ADMIN_*` environment variable.

use crate::domain::models::CurrentUser;
use crate::shared::constants::{
    ADMIN_RESOURCE_PATH, BASIC_LAYOUT, DEFAULT_ROUTE, FALLBACK_OPEN_KEY, RESIZE_NOTIFY_DELAY_MS,
};
use crate::shared::errors::{AppError, Result};

const DEFAULT_AVATAR: &str = "https://gw.alipayobjects.com/zos/rmsportal/BiazfanxmamNRoxxVxka.png";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Prefix for admin requests; empty means same origin
    pub api_base_url: String,
    pub admin_resource: String,
    pub layout: String,
    pub default_route: String,
    pub fallback_open_key: String,
    pub resize_notify_delay_ms: u32,
    /// Profile returned by the current-user server function
    pub profile: CurrentUser,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url().to_string(),
            admin_resource: ADMIN_RESOURCE_PATH.to_string(),
            layout: BASIC_LAYOUT.to_string(),
            default_route: DEFAULT_ROUTE.to_string(),
            fallback_open_key: FALLBACK_OPEN_KEY.to_string(),
            resize_notify_delay_ms: RESIZE_NOTIFY_DELAY_MS,
            profile: CurrentUser {
                name: Some("Serati Ma".to_string()),
                avatar: Some(DEFAULT_AVATAR.to_string()),
                notify_count: Some(12),
            },
        }
    }
}

// The browser resolves relative URLs against the page origin
#[cfg(target_arch = "wasm32")]
fn default_base_url() -> &'static str {
    ""
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> &'static str {
    "http://127.0.0.1:8080"
}

impl ShellConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each `ADMIN_*` key
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("ADMIN_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(resource) = lookup("ADMIN_RESOURCE_PATH") {
            config.admin_resource = require_absolute("ADMIN_RESOURCE_PATH", resource)?;
        }
        if let Some(route) = lookup("ADMIN_DEFAULT_ROUTE") {
            config.default_route = require_absolute("ADMIN_DEFAULT_ROUTE", route)?;
        }
        if let Some(key) = lookup("ADMIN_FALLBACK_OPEN_KEY") {
            config.fallback_open_key = key;
        }
        if let Some(delay) = lookup("ADMIN_RESIZE_DELAY_MS") {
            config.resize_notify_delay_ms = parse_number("ADMIN_RESIZE_DELAY_MS", &delay)?;
        }
        if let Some(name) = lookup("ADMIN_USER_NAME") {
            config.profile.name = Some(name);
        }
        if let Some(avatar) = lookup("ADMIN_USER_AVATAR") {
            config.profile.avatar = Some(avatar);
        }
        if let Some(count) = lookup("ADMIN_NOTIFY_COUNT") {
            config.profile.notify_count = Some(parse_number("ADMIN_NOTIFY_COUNT", &count)?);
        }

        Ok(config)
    }

    /// Full URL of the admin resource
    pub fn admin_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.admin_resource)
    }
}

fn require_absolute(key: &str, value: String) -> Result<String> {
    if value.starts_with('/') {
        Ok(value)
    } else {
        Err(AppError::InvalidConfig(format!(
            "{} must start with '/', got '{}'",
            key, value
        )))
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|e| AppError::InvalidConfig(format!("{} is not a number ({}): {}", key, value, e)))
}
