/// How a navigation touches the browser history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New history entry
    Push,
    /// Overwrite the current entry
    Replace,
}

impl HistoryMode {
    /// Navigating to the page already shown must not grow the history,
    /// or the back button would land on the same page again.
    pub fn for_target(target: &str, current_path: &str) -> Self {
        if target == current_path {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        }
    }
}
