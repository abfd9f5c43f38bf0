//! Tool management framework for newsdesk
//!
//! This crate provides the seams between the analysis engine and the
//! protocol layer: callables (tools) and prompt templates that are served
//! to an LLM agent, plus a registry to look them up by name.

pub mod prompt;
pub mod registry;
pub mod schema;
pub mod tool;

pub use prompt::{Prompt, PromptArgument};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolOutput};
