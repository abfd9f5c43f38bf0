//! Prompt templates served next to the news tools

use newsdesk_core::{Error, Result};
use newsdesk_tools::{Prompt, PromptArgument};
use serde_json::{Map, Value};

/// Frames caller-supplied news data as a financial analyst task
#[derive(Debug, Default, Clone, Copy)]
pub struct NewsAnalystPrompt;

impl NewsAnalystPrompt {
    pub const NAME: &'static str = "news_analyst";
}

impl Prompt for NewsAnalystPrompt {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Analyze news articles and sentiment data and summarize the key points, \
         sentiment trends and potential impact on the company or market."
    }

    fn arguments(&self) -> Vec<PromptArgument> {
        vec![PromptArgument::required(
            "prompt",
            "News data or question to analyze",
        )]
    }

    fn render(&self, arguments: &Map<String, Value>) -> Result<String> {
        let prompt = arguments
            .get("prompt")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidParams("missing string argument `prompt`".to_string()))?;

        Ok(format!(
            "You are a helpful financial news analyst designed to interpret news sentiment \
             and coverage.\n\
             Using the information below, summarize the key points, sentiment trends, \
             and potential impact on the company or market.\n\
             Respond in a concise and professional tone.\n\
             \n\
             Prompt: {prompt}"
        ))
    }
}
