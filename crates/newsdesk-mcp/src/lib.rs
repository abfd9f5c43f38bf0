//! Model Context Protocol (MCP) server for newsdesk
//!
//! Serves the tools of a [`newsdesk_tools::ToolRegistry`] and a set of
//! prompt templates over newline-delimited JSON-RPC 2.0. Only protocol
//! frames are written to the output stream; logs go through `tracing`.
//!
//! # Example
//!
//! ```no_run
//! use newsdesk_mcp::MCPServer;
//! use newsdesk_tools::ToolRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(ToolRegistry::new());
//! let server = MCPServer::new("news_server", "0.1.0", registry);
//!
//! // Runs until stdin reaches EOF
//! server.serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod protocol;
pub mod server;

pub use error::MCPError;
pub use server::MCPServer;

/// Result type for MCP operations
pub type Result<T> = std::result::Result<T, MCPError>;
