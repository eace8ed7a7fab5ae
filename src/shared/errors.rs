use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AppError {
    /// True for errors raised by the server answering outside 2xx
    pub fn is_status(&self) -> bool {
        matches!(self, AppError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
