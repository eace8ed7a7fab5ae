use dioxus::prelude::*;

use crate::shared::logging::log_breakpoint_change;
use crate::shared::state::{UiCommand, UiStore};

/// Below this query the sidebar collapses on its own
pub const MOBILE_QUERY: &str = "(max-width: 767px)";

/// Viewport width band, exposed as a `screen-*` class on the layout root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ScreenSize {
    pub fn from_width(width: f64) -> Self {
        if width < 576.0 {
            ScreenSize::Xs
        } else if width < 768.0 {
            ScreenSize::Sm
        } else if width < 992.0 {
            ScreenSize::Md
        } else if width < 1200.0 {
            ScreenSize::Lg
        } else {
            ScreenSize::Xl
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ScreenSize::Xs => "screen-xs",
            ScreenSize::Sm => "screen-sm",
            ScreenSize::Md => "screen-md",
            ScreenSize::Lg => "screen-lg",
            ScreenSize::Xl => "screen-xl",
        }
    }

    /// Same bands `MOBILE_QUERY` matches
    pub fn is_mobile(&self) -> bool {
        matches!(self, ScreenSize::Xs | ScreenSize::Sm)
    }
}

/// Track the viewport size band and collapse the sidebar whenever the
/// viewport crosses into `MOBILE_QUERY` (expanding it again on the way out).
///
/// Listeners are removed when the calling component unmounts.
pub fn use_breakpoint(store: UiStore) -> Signal<ScreenSize> {
    let screen = use_signal(current_screen);

    #[cfg(target_arch = "wasm32")]
    use_hook(move || std::rc::Rc::new(browser::ViewportWatch::attach(store, screen)));

    // A narrow viewport at mount collapses right away
    use_effect(move || {
        let size = *screen.peek();
        if size.is_mobile() {
            let mut store = store;
            log_breakpoint_change(size.class(), true);
            store.dispatch(UiCommand::ChangeLayoutCollapsed(true));
        }
    });

    screen
}

#[cfg(target_arch = "wasm32")]
fn current_screen() -> ScreenSize {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(ScreenSize::from_width)
        .unwrap_or(ScreenSize::Xl)
}

// Server render and desktop assume a wide screen
#[cfg(not(target_arch = "wasm32"))]
fn current_screen() -> ScreenSize {
    ScreenSize::Xl
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    use super::{current_screen, log_breakpoint_change, MOBILE_QUERY};
    use crate::shared::state::{UiCommand, UiStore};

    /// `matchMedia` change listener plus window `resize` listener
    pub struct ViewportWatch {
        query: Option<MediaQueryList>,
        on_change: Closure<dyn FnMut(MediaQueryListEvent)>,
        on_resize: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ViewportWatch {
        pub fn attach(store: UiStore, screen: Signal<super::ScreenSize>) -> Self {
            let mut store = store;
            let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                let mobile = event.matches();
                log_breakpoint_change(current_screen().class(), mobile);
                store.dispatch(UiCommand::ChangeLayoutCollapsed(mobile));
            }) as Box<dyn FnMut(_)>);

            let mut screen = screen;
            let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let size = current_screen();
                if *screen.peek() != size {
                    screen.set(size);
                }
            }) as Box<dyn FnMut(_)>);

            let query = web_sys::window().and_then(|window| {
                if let Err(e) = window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                {
                    tracing::warn!("Failed to listen for resize: {:?}", e);
                }
                match window.match_media(MOBILE_QUERY) {
                    Ok(query) => query,
                    Err(e) => {
                        tracing::warn!("matchMedia({}) failed: {:?}", MOBILE_QUERY, e);
                        None
                    }
                }
            });
            if let Some(query) = &query {
                if let Err(e) = query
                    .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                {
                    tracing::warn!("Failed to listen for breakpoint changes: {:?}", e);
                }
            }

            Self {
                query,
                on_change,
                on_resize,
            }
        }
    }

    impl Drop for ViewportWatch {
        fn drop(&mut self) {
            if let Some(query) = &self.query {
                let _ = query.remove_event_listener_with_callback(
                    "change",
                    self.on_change.as_ref().unchecked_ref(),
                );
            }
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.on_resize.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
