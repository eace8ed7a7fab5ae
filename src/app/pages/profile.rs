use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState};

/// Detail page reachable by URL only (`/profile/:id`)
#[component]
pub fn Profile(id: String) -> Element {
    rsx! {
        div { class: "c-page",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "Profile" }
            }
            Card { title: Some(format!("Record {}", id)),
                if id.is_empty() {
                    EmptyState { message: "No record selected".to_string() }
                } else {
                    dl { class: "c-description-list",
                        dt { "Identifier" }
                        dd { "{id}" }
                    }
                }
            }
        }
    }
}
