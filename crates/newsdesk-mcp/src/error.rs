//! Error types for the MCP server

use thiserror::Error;

/// Errors that end a serving session
///
/// Malformed or unknown requests never surface here; they are answered
/// with JSON-RPC error objects and the session continues.
#[derive(Error, Debug)]
pub enum MCPError {
    /// Reading a frame or writing a response failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convert MCPError to newsdesk_core::Error
impl From<MCPError> for newsdesk_core::Error {
    fn from(err: MCPError) -> Self {
        newsdesk_core::Error::ProcessingFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: MCPError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "IO error: closed");

        let core: newsdesk_core::Error = err.into();
        assert!(!core.is_caller_error());
    }
}
