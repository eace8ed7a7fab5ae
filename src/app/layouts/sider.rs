use dioxus::prelude::*;

use crate::app::components::Menu;
use crate::app::pages::routes::Route;
use crate::shared::constants::{APP_TITLE, LOGO_URL, SIDER_WIDTH};
use crate::shared::menu::MenuItem;

/// Left sidebar: logo plus the navigation menu
#[component]
pub fn Sider(
    items: Vec<MenuItem>,
    selected_keys: Vec<String>,
    open_keys: Vec<String>,
    collapsed: bool,
    on_toggle_group: EventHandler<String>,
) -> Element {
    let sider_class = if collapsed { "c-sider c-sider--collapsed" } else { "c-sider" };
    let width_style = if collapsed {
        String::new()
    } else {
        format!("width: {}px; min-width: {}px;", SIDER_WIDTH, SIDER_WIDTH)
    };

    rsx! {
        aside { class: "{sider_class}", style: "{width_style}",
            div { class: "c-sider__logo",
                Link { to: Route::Home {},
                    img { src: LOGO_URL, alt: "logo" }
                    if !collapsed {
                        h1 { "{APP_TITLE}" }
                    }
                }
            }
            Menu {
                items,
                selected_keys,
                open_keys,
                collapsed,
                on_toggle_group,
            }
        }
    }
}
