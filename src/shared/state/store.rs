use dioxus::prelude::*;

use super::{UiCommand, UiEffect, UiState};
use crate::domain::models::CurrentUser;
use crate::server_fns::get_current_user;
use crate::shared::logging::{log_user_fetch_error, log_user_fetch_start, log_user_fetch_success};

/// Context handle over the shared UI state.
///
/// Provided once by `App`; reads subscribe the calling component, writes
/// go through `dispatch`.
#[derive(Clone, Copy, PartialEq)]
pub struct UiStore {
    state: Signal<UiState>,
}

impl UiStore {
    pub fn new(initial: UiState) -> Self {
        Self {
            state: Signal::new(initial),
        }
    }

    pub fn collapsed(&self) -> bool {
        self.state.read().collapsed
    }

    pub fn current_user(&self) -> CurrentUser {
        self.state.read().current_user.clone()
    }

    pub fn dispatch(&mut self, command: UiCommand) {
        let effect = self.state.write().apply(command);
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: UiEffect) {
        match effect {
            UiEffect::FetchCurrentUser => {
                let mut store = *self;
                spawn(async move {
                    log_user_fetch_start();
                    match get_current_user().await {
                        Ok(user) => {
                            log_user_fetch_success(user.name.as_deref());
                            store.dispatch(UiCommand::SaveCurrentUser(user));
                        }
                        Err(e) => log_user_fetch_error(&e.to_string()),
                    }
                });
            }
        }
    }
}

pub fn use_ui_store() -> UiStore {
    use_context::<UiStore>()
}
