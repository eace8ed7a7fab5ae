use dioxus::prelude::*;
use dioxus::core::Task;

use crate::shared::logging::log_collapse_toggle;
use crate::shared::state::{UiCommand, UiStore};

/// Pending synthetic `resize` event.
///
/// The task is spawned in the calling component's scope, so it is dropped
/// with the component; scheduling again cancels the previous one.
#[derive(Clone, Copy)]
pub struct ResizeNotifier {
    pending: Signal<Option<Task>>,
    delay_ms: u32,
    notify: fn(),
}

impl ResizeNotifier {
    pub fn schedule(&mut self) {
        self.cancel();

        let delay_ms = self.delay_ms;
        let notify = self.notify;
        let mut pending = self.pending;
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            notify();
            pending.set(None);
        });
        self.pending.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
    }
}

pub fn use_resize_notifier(delay_ms: u32) -> ResizeNotifier {
    use_resize_notifier_with(delay_ms, dispatch_resize_event)
}

/// Same as `use_resize_notifier`, calling `notify` instead of firing the DOM event
pub fn use_resize_notifier_with(delay_ms: u32, notify: fn()) -> ResizeNotifier {
    let pending = use_signal(|| None::<Task>);
    ResizeNotifier {
        pending,
        delay_ms,
        notify,
    }
}

/// Sidebar collapse toggle bound to the shared UI store
#[derive(Clone, Copy)]
pub struct CollapseToggle {
    store: UiStore,
    resize: ResizeNotifier,
}

impl CollapseToggle {
    pub fn toggle(&mut self) {
        let collapsed = !self.store.collapsed();
        self.store.dispatch(UiCommand::ChangeLayoutCollapsed(collapsed));
        log_collapse_toggle(collapsed, self.resize.delay_ms);
        self.resize.schedule();
    }
}

pub fn use_collapse_toggle(store: UiStore, resize_delay_ms: u32) -> CollapseToggle {
    let resize = use_resize_notifier(resize_delay_ms);
    CollapseToggle { store, resize }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Fire a window `resize` so width-measuring widgets recompute
#[cfg(target_arch = "wasm32")]
fn dispatch_resize_event() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::Event::new("resize") {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                tracing::warn!("Failed to dispatch resize event: {:?}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to create resize event: {:?}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn dispatch_resize_event() {
    // No window outside the browser
    tracing::trace!("Skipping resize event on native target");
}
