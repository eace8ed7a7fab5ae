use dioxus::prelude::*;

use super::{render_page, NotFound};
use crate::app::layouts::BasicLayout;
use crate::config::ShellConfig;
use crate::shared::logging::log_unroutable_path;
use crate::shared::nav_data::get_route_data;
use crate::shared::routing::{dispatch, HistoryMode, RouteOutcome};
use crate::shared::services::AdminService;
use crate::shared::state::{UiState, UiStore};

/// Router entry points. Page selection itself is data-driven: both
/// variants hand the path to `RouteSwitch`, which resolves it against the
/// navigation route table.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(BasicLayout)]
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

impl Route {
    /// Parse an application path, logging paths the router rejects
    pub fn from_path(path: &str) -> Option<Route> {
        match path.parse::<Route>() {
            Ok(route) => Some(route),
            Err(_) => {
                log_unroutable_path(path);
                None
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        ShellConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default configuration: {}", e);
            ShellConfig::default()
        })
    });
    use_context_provider(|| UiStore::new(UiState::default()));
    use_context_provider(|| AdminService::new(&config));

    use_effect(|| {
        tracing::info!("Admin shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        RouteSwitch { pathname: "/".to_string() }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let pathname = format!("/{}", segments.join("/"));

    rsx! {
        RouteSwitch { pathname }
    }
}

/// Renders the first route table entry matching `pathname`
#[component]
fn RouteSwitch(pathname: String) -> Element {
    let config = use_context::<ShellConfig>();
    let table = use_hook(|| get_route_data(&config.layout).unwrap_or_default());

    let _span = crate::log_context!(config.layout.as_str(), pathname.as_str()).entered();
    match dispatch(&table, &pathname, &config.default_route) {
        RouteOutcome::Redirect { to, mode } => rsx! {
            Redirect { to, mode }
        },
        RouteOutcome::Render { entry, params } => render_page(entry.component, &params),
        RouteOutcome::NotFound => rsx! {
            NotFound {}
        },
    }
}

/// Navigate to `to` once mounted
#[component]
fn Redirect(to: String, mode: HistoryMode) -> Element {
    let navigator = navigator();

    use_effect(move || {
        if let Some(route) = Route::from_path(&to) {
            match mode {
                HistoryMode::Replace => navigator.replace(route),
                HistoryMode::Push => navigator.push(route),
            };
        }
    });

    rsx! {}
}
