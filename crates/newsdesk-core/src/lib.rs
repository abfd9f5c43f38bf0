//! Core abstractions for newsdesk
//!
//! This crate defines the error type that crosses crate seams: tools report
//! failures with it and the MCP server maps it onto protocol responses.

pub mod error;

pub use error::{Error, Result};
