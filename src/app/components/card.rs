use dioxus::prelude::*;

/// Content panel with an optional title row
#[component]
pub fn Card(
    title: Option<String>,
    bordered: Option<bool>,
    children: Element,
) -> Element {
    let bordered_class = if bordered.unwrap_or(true) { "c-card--bordered" } else { "" };

    rsx! {
        div {
            class: "c-card {bordered_class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 { class: "c-card__title", "{title}" }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
