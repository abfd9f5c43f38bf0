//! `get_market_buzz`: organizations most mentioned in market news

use async_trait::async_trait;
use newsdesk_core::Result;
use newsdesk_tools::schema::{integer, object, with_default};
use newsdesk_tools::{Tool, ToolOutput};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use super::parse_params;
use crate::engine::{DEFAULT_BUZZ_LIMIT, NewsEngine};

const DEFAULT_DAYS: u32 = 3;

#[derive(Debug, Deserialize)]
struct MarketBuzzParams {
    #[serde(default = "default_days")]
    days: u32,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_limit() -> usize {
    DEFAULT_BUZZ_LIMIT
}

/// Tool ranking organizations by mentions in market-wide coverage
pub struct MarketBuzzTool {
    engine: Arc<NewsEngine>,
}

impl MarketBuzzTool {
    pub fn new(engine: Arc<NewsEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for MarketBuzzTool {
    async fn execute(&self, params: Value) -> Result<ToolOutput> {
        let params: MarketBuzzParams = parse_params(params)?;

        let output = match self.engine.market_buzz(params.days, params.limit).await {
            Ok(buzz) => ToolOutput::text(buzz.to_string()).with_structured(&buzz),
            Err(failure) => {
                ToolOutput::text(failure.to_string()).with_structured(&failure.to_json())
            }
        };
        Ok(output)
    }

    fn name(&self) -> &str {
        "get_market_buzz"
    }

    fn description(&self) -> &str {
        "List the companies and organizations mentioned most often in recent \
         market news, with the average sentiment of the articles mentioning them."
    }

    fn input_schema(&self) -> Value {
        object(
            [
                (
                    "days",
                    with_default(integer("Number of days to look back"), DEFAULT_DAYS),
                ),
                (
                    "limit",
                    with_default(
                        integer("Maximum number of companies to return"),
                        DEFAULT_BUZZ_LIMIT,
                    ),
                ),
            ],
            &[],
        )
    }
}
