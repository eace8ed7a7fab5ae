use dioxus::prelude::*;

use crate::app::components::Card;

#[derive(Debug, Clone, PartialEq)]
struct Stat {
    title: &'static str,
    value: &'static str,
    footer: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { title: "Total sales", value: "¥ 126,560", footer: "Daily sales ¥12,423" },
    Stat { title: "Visits", value: "8,846", footer: "Daily visits 1,234" },
    Stat { title: "Payments", value: "6,560", footer: "Conversion rate 60%" },
    Stat { title: "Campaign effect", value: "78%", footer: "Week over week 12%" },
];

#[component]
pub fn Analysis() -> Element {
    rsx! {
        div { class: "c-page c-page--analysis",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "Analysis" }
            }
            div { class: "c-grid c-grid--4",
                for stat in STATS {
                    Card { key: "{stat.title}", title: Some(stat.title.to_string()),
                        div { class: "c-stat__value", "{stat.value}" }
                        div { class: "c-stat__footer", "{stat.footer}" }
                    }
                }
            }
        }
    }
}
