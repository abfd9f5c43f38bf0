//! Tool trait definition

use async_trait::async_trait;
use newsdesk_core::Result;
use serde::Serialize;
use serde_json::Value;

/// Result of a tool invocation
///
/// Tools answer with a single text block meant for an LLM to read. When the
/// result has a natural structured form it is carried alongside so that
/// programmatic callers do not have to parse the text.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Human/LLM readable result
    pub text: String,
    /// Optional machine readable result
    pub structured: Option<Value>,
}

impl ToolOutput {
    /// Create a text-only output
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            structured: None,
        }
    }

    /// Attach a structured form of the result
    ///
    /// Serialization failures drop the structured part; the text is always kept.
    pub fn with_structured(mut self, value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => self.structured = Some(v),
            Err(e) => tracing::warn!(error = %e, "failed to serialize structured tool output"),
        }
        self
    }
}

/// Trait for tools that agents can execute
///
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// Only malformed parameters should surface as `Err`; failures of the
    /// underlying data providers are reported inside the returned text.
    async fn execute(&self, params: Value) -> Result<ToolOutput>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;
}
