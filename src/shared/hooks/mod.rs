// Custom Dioxus hooks
pub mod use_breakpoint;
pub mod use_collapse_toggle;

pub use use_breakpoint::{use_breakpoint, ScreenSize, MOBILE_QUERY};
pub use use_collapse_toggle::{
    use_collapse_toggle, use_resize_notifier, use_resize_notifier_with, CollapseToggle,
    ResizeNotifier,
};
