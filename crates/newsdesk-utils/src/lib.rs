//! Shared utilities for newsdesk
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup and logging configuration.

pub mod config;
pub mod logging;

pub use config::{LogFormat, LoggingConfig};
pub use logging::init_tracing_with;
