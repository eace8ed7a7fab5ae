pub mod basic_layout;
pub mod global_footer;
pub mod global_header;
pub mod sider;

pub use basic_layout::BasicLayout;
pub use global_footer::{default_footer_links, FooterLink, GlobalFooter};
pub use global_header::GlobalHeader;
pub use sider::Sider;
