//! `get_company_news`: recent articles about a company with sentiment

use async_trait::async_trait;
use newsdesk_core::Result;
use newsdesk_tools::schema::{integer, object, string, with_default};
use newsdesk_tools::{Tool, ToolOutput};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use super::{normalize_ticker, parse_params};
use crate::engine::NewsEngine;

const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
struct CompanyNewsParams {
    company_ticker: String,
    #[serde(default = "default_days")]
    days: u32,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

/// Tool returning a news digest for one company
pub struct CompanyNewsTool {
    engine: Arc<NewsEngine>,
}

impl CompanyNewsTool {
    pub fn new(engine: Arc<NewsEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for CompanyNewsTool {
    async fn execute(&self, params: Value) -> Result<ToolOutput> {
        let params: CompanyNewsParams = parse_params(params)?;
        let ticker = normalize_ticker(&params.company_ticker)?;

        let output = match self.engine.company_news(&ticker, params.days).await {
            Ok(digest) => ToolOutput::text(digest.to_string()).with_structured(&digest),
            Err(failure) => {
                ToolOutput::text(failure.to_string()).with_structured(&failure.to_json())
            }
        };
        Ok(output)
    }

    fn name(&self) -> &str {
        "get_company_news"
    }

    fn description(&self) -> &str {
        "Retrieve recent news articles for a company by stock ticker, \
         with a sentiment label and polarity score for each article."
    }

    fn input_schema(&self) -> Value {
        object(
            [
                ("company_ticker", string("Stock ticker symbol, e.g. AAPL")),
                (
                    "days",
                    with_default(integer("Number of days to look back"), DEFAULT_DAYS),
                ),
            ],
            &["company_ticker"],
        )
    }
}
