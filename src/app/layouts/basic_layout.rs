use dioxus::prelude::*;

use super::{default_footer_links, GlobalFooter, GlobalHeader, Sider};
use crate::app::pages::routes::Route;
use crate::config::ShellConfig;
use crate::shared::hooks::{use_breakpoint, use_collapse_toggle};
use crate::shared::menu::LayoutController;
use crate::shared::nav_data::get_nav_data;
use crate::shared::state::{use_ui_store, UiCommand};

/// Application shell: sidebar menu, header, routed content and footer.
///
/// The menu controller is built once, from the URL the layout mounts on;
/// afterwards only submenu clicks change which groups are open.
#[component]
pub fn BasicLayout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context::<ShellConfig>();
    let mut store = use_ui_store();
    let pathname = use_route::<Route>().to_string();

    let mut controller = use_signal({
        let pathname = pathname.clone();
        let fallback = config.fallback_open_key.clone();
        move || LayoutController::new(get_nav_data(), &pathname, &fallback)
    });
    let mut collapse = use_collapse_toggle(store, config.resize_notify_delay_ms);
    let screen = use_breakpoint(store);

    // Load the signed-in user once, after mount
    use_effect(move || {
        store.dispatch(UiCommand::FetchCurrent);
    });

    let collapsed = store.collapsed();
    let (items, selected_keys, open_keys) = {
        let controller = controller.read();
        (
            controller.menu_items(&pathname),
            controller.selected_keys(&pathname),
            controller.open_keys(collapsed),
        )
    };
    let layout_class = if collapsed { "c-layout c-layout--collapsed" } else { "c-layout" };
    let screen_class = screen().class();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "{layout_class} {screen_class}",
            Sider {
                items,
                selected_keys,
                open_keys,
                collapsed,
                on_toggle_group: move |key: String| controller.write().toggle_group(&key, collapsed),
            }
            div { class: "c-layout__body",
                GlobalHeader {
                    collapsed,
                    current_user: store.current_user(),
                    on_toggle: move |_| collapse.toggle(),
                }
                main { class: "c-layout__content",
                    Outlet::<Route> {}
                    GlobalFooter {
                        links: default_footer_links(),
                        copyright: "2017 Ant Financial Experience Technology Department".to_string(),
                    }
                }
            }
        }
    }
}
