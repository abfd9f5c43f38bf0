//! MCP tools exposing the news engine

pub mod company_news;
pub mod market_buzz;
pub mod sentiment;

pub use company_news::CompanyNewsTool;
pub use market_buzz::MarketBuzzTool;
pub use sentiment::SentimentAnalysisTool;

use newsdesk_core::{Error, Result};
use newsdesk_tools::ToolRegistry;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::engine::NewsEngine;

/// Register the three news tools, in listing order
pub fn register_news_tools(registry: &ToolRegistry, engine: Arc<NewsEngine>) {
    registry.register(Arc::new(CompanyNewsTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(SentimentAnalysisTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(MarketBuzzTool::new(engine)));
}

/// Deserialize tool arguments; absent arguments mean all defaults
fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    let params = if params.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        params
    };
    Ok(serde_json::from_value(params)?)
}

/// Trimmed, non-empty ticker
fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(Error::InvalidParams(
            "company_ticker must not be empty".to_string(),
        ));
    }
    Ok(ticker.to_string())
}
