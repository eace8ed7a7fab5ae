use dioxus::prelude::*;

use super::Icon;
use crate::app::pages::routes::Route;
use crate::shared::menu::MenuItem;
use crate::shared::routing::HistoryMode;

/// Inline sidebar menu
#[component]
pub fn Menu(
    items: Vec<MenuItem>,
    selected_keys: Vec<String>,
    open_keys: Vec<String>,
    collapsed: bool,
    on_toggle_group: EventHandler<String>,
) -> Element {
    let menu_class = if collapsed {
        "c-menu c-menu--dark c-menu--inline c-menu--collapsed"
    } else {
        "c-menu c-menu--dark c-menu--inline"
    };

    rsx! {
        nav { class: "{menu_class}",
            ul { class: "c-menu__list",
                for item in items {
                    MenuEntry {
                        key: "{item.key()}",
                        item: item.clone(),
                        selected_keys: selected_keys.clone(),
                        open_keys: open_keys.clone(),
                        on_toggle_group,
                    }
                }
            }
        }
    }
}

/// One menu item; groups render their children recursively
#[component]
pub fn MenuEntry(
    item: MenuItem,
    selected_keys: Vec<String>,
    open_keys: Vec<String>,
    on_toggle_group: EventHandler<String>,
) -> Element {
    let is_selected = selected_keys.iter().any(|k| k == item.key());

    match item {
        MenuItem::Group { key, title, icon, children } => {
            let is_open = open_keys.contains(&key);
            let group_class = match (is_open, is_selected) {
                (true, true) => "c-menu__submenu c-menu__submenu--open c-menu__submenu--selected",
                (true, false) => "c-menu__submenu c-menu__submenu--open",
                (false, true) => "c-menu__submenu c-menu__submenu--selected",
                (false, false) => "c-menu__submenu",
            };

            rsx! {
                li { class: "{group_class}",
                    div {
                        class: "c-menu__submenu-title",
                        role: "button",
                        aria_expanded: "{is_open}",
                        onclick: move |_| on_toggle_group.call(key.clone()),
                        if let Some(kind) = icon {
                            Icon { kind }
                        }
                        span { class: "c-menu__label", "{title}" }
                        span { class: "c-menu__arrow" }
                    }
                    if is_open {
                        ul { class: "c-menu__sub",
                            for child in children {
                                MenuEntry {
                                    key: "{child.key()}",
                                    item: child.clone(),
                                    selected_keys: selected_keys.clone(),
                                    open_keys: open_keys.clone(),
                                    on_toggle_group,
                                }
                            }
                        }
                    }
                }
            }
        }
        MenuItem::Leaf { name, icon, path, target, history, .. } => {
            let navigator = navigator();
            let item_class = item_class(is_selected);
            let click_target = target.clone();
            let href = path.clone();

            rsx! {
                li { class: "{item_class}",
                    a {
                        href: "{href}",
                        target: target,
                        onclick: move |evt: MouseEvent| {
                            // A target window is left to the browser
                            if click_target.is_some() {
                                return;
                            }
                            evt.prevent_default();
                            if let Some(route) = Route::from_path(&path) {
                                match history {
                                    HistoryMode::Replace => navigator.replace(route),
                                    HistoryMode::Push => navigator.push(route),
                                };
                            }
                        },
                        if let Some(kind) = icon {
                            Icon { kind }
                        }
                        span { class: "c-menu__label", "{name}" }
                    }
                }
            }
        }
        MenuItem::ExternalLink { name, icon, href, target, .. } => {
            let item_class = item_class(is_selected);

            rsx! {
                li { class: "{item_class}",
                    a {
                        href: "{href}",
                        target: target,
                        rel: "noopener noreferrer",
                        if let Some(kind) = icon {
                            Icon { kind }
                        }
                        span { class: "c-menu__label", "{name}" }
                    }
                }
            }
        }
    }
}

fn item_class(selected: bool) -> &'static str {
    if selected {
        "c-menu__item c-menu__item--selected"
    } else {
        "c-menu__item"
    }
}
