//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::CurrentUser;

/// Profile of the signed-in user, as configured on the server
#[server]
pub async fn get_current_user() -> Result<CurrentUser, ServerFnError> {
    use crate::config::ShellConfig;

    let config = ShellConfig::from_env().map_err(|e| {
        tracing::error!("Invalid shell configuration: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    Ok(config.profile)
}
