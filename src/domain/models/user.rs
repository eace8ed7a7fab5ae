use serde::{Deserialize, Serialize};

/// Signed-in user as shown in the header
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, rename = "notifyCount")]
    pub notify_count: Option<u32>,
}

impl CurrentUser {
    /// The header shows a spinner until a named user is loaded
    pub fn is_loaded(&self) -> bool {
        self.name.is_some()
    }
}
