//! Prompt template trait

use newsdesk_core::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Argument accepted by a prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

impl PromptArgument {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            required: true,
        }
    }
}

/// A named prompt template that agents can fetch and fill in
pub trait Prompt: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn arguments(&self) -> Vec<PromptArgument>;

    /// Render the prompt text from caller-supplied arguments
    fn render(&self, arguments: &Map<String, Value>) -> Result<String>;
}
