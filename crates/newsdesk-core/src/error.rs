//! Error types for newsdesk-core

use thiserror::Error;

/// Result type alias for newsdesk-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool and prompt operations
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied arguments that do not match the declared schema
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Processing failed after arguments were accepted
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

impl Error {
    /// Whether the error was caused by the caller rather than the server
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidParams(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidParams(err.to_string())
    }
}
