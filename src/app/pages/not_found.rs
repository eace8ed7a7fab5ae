use dioxus::prelude::*;

use super::routes::Route;

/// Fallback for paths no route matches
#[component]
pub fn NotFound() -> Element {
    rsx! {
        div { class: "c-exception",
            div { class: "c-exception__image", "404" }
            div { class: "c-exception__content",
                h1 { "404" }
                p { class: "c-exception__desc", "Sorry, the page you visited does not exist." }
                Link { to: Route::Home {}, class: "c-button c-button--primary", "Back to home" }
            }
        }
    }
}
