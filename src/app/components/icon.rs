use dioxus::prelude::*;

/// Glyph for a navigation/header icon name
pub fn icon_glyph(kind: &str) -> &'static str {
    match kind {
        "dashboard" => "📊",
        "warning" => "⚠️",
        "book" => "📖",
        "user" => "👤",
        "setting" => "⚙️",
        "logout" => "🚪",
        "bell" => "🔔",
        "menu-fold" => "⇤",
        "menu-unfold" => "⇥",
        "copyright" => "©",
        "table" => "📋",
        "profile" => "🪪",
        _ => "•",
    }
}

#[component]
pub fn Icon(kind: String) -> Element {
    let glyph = icon_glyph(&kind);

    rsx! {
        span { class: "c-icon c-icon--{kind}", aria_hidden: "true", "{glyph}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        assert_eq!(icon_glyph("dashboard"), "📊");
        assert_eq!(icon_glyph("menu-fold"), "⇤");
        assert_eq!(icon_glyph("no-such-icon"), "•");
    }
}
