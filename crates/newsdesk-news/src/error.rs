//! Error types for news operations

use thiserror::Error;

/// News retrieval and analysis errors
#[derive(Debug, Error)]
pub enum NewsError {
    /// Provider answered with a non-success status
    #[error("{message}")]
    ProviderStatus {
        /// Provider error code, when one was supplied
        code: Option<String>,
        message: String,
    },

    /// Provider answered with an HTTP error and no usable body
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl NewsError {
    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status >= 500,
            Self::NetworkError(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }
}

/// Result type alias for news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Convert NewsError to newsdesk_core::Error
impl From<NewsError> for newsdesk_core::Error {
    fn from(err: NewsError) -> Self {
        newsdesk_core::Error::ProcessingFailed(err.to_string())
    }
}
