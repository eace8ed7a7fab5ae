use dioxus::prelude::*;

use crate::app::components::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
    pub blank_target: bool,
}

impl FooterLink {
    pub fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            blank_target: true,
        }
    }
}

/// Links shown under every page
pub fn default_footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Pro Home", "http://pro.ant.design"),
        FooterLink::new("GitHub", "https://github.com/ant-design/ant-design-pro"),
        FooterLink::new("Ant Design", "http://ant.design"),
    ]
}

#[component]
pub fn GlobalFooter(links: Vec<FooterLink>, copyright: String) -> Element {
    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__links",
                for link in links {
                    a {
                        key: "{link.title}",
                        href: "{link.href}",
                        target: if link.blank_target { "_blank" } else { "_self" },
                        rel: "noopener noreferrer",
                        "{link.title}"
                    }
                }
            }
            div { class: "c-footer__copyright",
                "Copyright "
                Icon { kind: "copyright".to_string() }
                " {copyright}"
            }
        }
    }
}
