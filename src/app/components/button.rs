use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Default,
    Danger,
    Link,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    loading: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Default);
    let loading = loading.unwrap_or(false);
    let disabled = disabled.unwrap_or(false) || loading;

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Default => "c-button--default",
        ButtonVariant::Danger => "c-button--danger",
        ButtonVariant::Link => "c-button--link",
    };
    let loading_class = if loading { "c-button--loading" } else { "" };

    rsx! {
        button {
            class: "c-button {variant_class} {loading_class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "c-spin c-spin--small" }
            }
            {children}
        }
    }
}
