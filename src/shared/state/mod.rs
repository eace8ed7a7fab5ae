//! Shared UI state and the commands that change it
//!
//! `UiState::apply` is the single writer: components never touch the
//! state directly, they dispatch a `UiCommand` through the `UiStore`.

pub mod store;

use crate::domain::models::CurrentUser;

pub use store::{use_ui_store, UiStore};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub collapsed: bool,
    pub current_user: CurrentUser,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    ChangeLayoutCollapsed(bool),
    FetchCurrent,
    SaveCurrentUser(CurrentUser),
}

/// Side effect requested by a command, run by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    FetchCurrentUser,
}

impl UiState {
    pub fn apply(&mut self, command: UiCommand) -> Option<UiEffect> {
        match command {
            UiCommand::ChangeLayoutCollapsed(collapsed) => {
                self.collapsed = collapsed;
                None
            }
            UiCommand::FetchCurrent => Some(UiEffect::FetchCurrentUser),
            UiCommand::SaveCurrentUser(user) => {
                self.current_user = user;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_command() {
        let mut state = UiState::default();
        assert_eq!(state.apply(UiCommand::ChangeLayoutCollapsed(true)), None);
        assert!(state.collapsed);
        state.apply(UiCommand::ChangeLayoutCollapsed(false));
        assert!(!state.collapsed);
    }

    #[test]
    fn test_fetch_current_requests_effect_only() {
        let mut state = UiState::default();
        let before = state.clone();
        assert_eq!(state.apply(UiCommand::FetchCurrent), Some(UiEffect::FetchCurrentUser));
        assert_eq!(state, before);
    }

    #[test]
    fn test_save_current_user() {
        let mut state = UiState::default();
        assert!(!state.current_user.is_loaded());
        state.apply(UiCommand::SaveCurrentUser(CurrentUser {
            name: Some("Serati Ma".to_string()),
            avatar: None,
            notify_count: Some(12),
        }));
        assert!(state.current_user.is_loaded());
        assert_eq!(state.current_user.notify_count, Some(12));
    }
}
