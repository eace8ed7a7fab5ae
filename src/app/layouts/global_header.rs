use dioxus::prelude::*;

use crate::app::components::{Icon, Spin};
use crate::domain::models::CurrentUser;

/// Top bar: collapse trigger on the left, notification badge and account on the right
#[component]
pub fn GlobalHeader(
    collapsed: bool,
    current_user: CurrentUser,
    on_toggle: EventHandler<()>,
) -> Element {
    let trigger_icon = if collapsed { "menu-unfold" } else { "menu-fold" };
    let notify_count = current_user.notify_count.unwrap_or(0);

    rsx! {
        header { class: "c-header",
            span {
                class: "c-header__trigger",
                role: "button",
                aria_label: "Toggle sidebar",
                onclick: move |_| on_toggle.call(()),
                Icon { kind: trigger_icon.to_string() }
            }
            div { class: "c-header__right",
                if let Some(name) = current_user.name.clone() {
                    span { class: "c-header__action c-header__notice",
                        Icon { kind: "bell".to_string() }
                        if notify_count > 0 {
                            span { class: "c-badge", "{notify_count}" }
                        }
                    }
                    div { class: "c-header__account c-dropdown",
                        span { class: "c-header__action",
                            if let Some(avatar) = current_user.avatar.clone() {
                                img { class: "c-avatar c-avatar--small", src: "{avatar}", alt: "{name}" }
                            }
                            span { class: "c-header__name", "{name}" }
                        }
                        ul { class: "c-dropdown__menu",
                            li { class: "c-dropdown__item c-dropdown__item--disabled",
                                Icon { kind: "user".to_string() }
                                "Account center"
                            }
                            li { class: "c-dropdown__item c-dropdown__item--disabled",
                                Icon { kind: "setting".to_string() }
                                "Settings"
                            }
                            li { class: "c-dropdown__divider" }
                            li { class: "c-dropdown__item",
                                Icon { kind: "logout".to_string() }
                                "Logout"
                            }
                        }
                    }
                } else {
                    span { class: "c-header__spin", Spin {} }
                }
            }
        }
    }
}
