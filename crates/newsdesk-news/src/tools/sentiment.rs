//! `get_sentiment_analysis`: aggregate sentiment and trend for a company

use async_trait::async_trait;
use newsdesk_core::Result;
use newsdesk_tools::schema::{integer, object, string, with_default};
use newsdesk_tools::{Tool, ToolOutput};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use super::{normalize_ticker, parse_params};
use crate::engine::NewsEngine;

const DEFAULT_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
struct SentimentParams {
    company_ticker: String,
    #[serde(default = "default_days")]
    days: u32,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

/// Tool returning a sentiment report for one company
pub struct SentimentAnalysisTool {
    engine: Arc<NewsEngine>,
}

impl SentimentAnalysisTool {
    pub fn new(engine: Arc<NewsEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for SentimentAnalysisTool {
    async fn execute(&self, params: Value) -> Result<ToolOutput> {
        let params: SentimentParams = parse_params(params)?;
        let ticker = normalize_ticker(&params.company_ticker)?;

        let output = match self.engine.sentiment_analysis(&ticker, params.days).await {
            Ok(outcome) => ToolOutput::text(outcome.to_string()).with_structured(&outcome),
            Err(failure) => {
                ToolOutput::text(failure.to_string()).with_structured(&failure.to_json())
            }
        };
        Ok(output)
    }

    fn name(&self) -> &str {
        "get_sentiment_analysis"
    }

    fn description(&self) -> &str {
        "Analyze news sentiment for a company by stock ticker: overall \
         sentiment, positive/neutral/negative article counts and a recent trend."
    }

    fn input_schema(&self) -> Value {
        object(
            [
                ("company_ticker", string("Stock ticker symbol, e.g. AAPL")),
                (
                    "days",
                    with_default(integer("Number of days to analyze"), DEFAULT_DAYS),
                ),
            ],
            &["company_ticker"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::engine::tests::{engine, resolver_for};
    use crate::source::MockArticleSource;
    use crate::testing::articles;

    #[tokio::test]
    async fn test_report_output() {
        let mut source = MockArticleSource::new();
        source
            .expect_search()
            .returning(|_| Ok(articles(&[0.4, 0.4, 0.4, 0.0, 0.0, 0.0])));

        let tool = SentimentAnalysisTool::new(Arc::new(engine(
            source,
            resolver_for(Some("Apple Inc.")),
        )));
        let output = tool.execute(json!({"company_ticker": "AAPL"})).await.unwrap();

        assert!(
            output
                .text
                .starts_with("Sentiment Analysis for Apple Inc. (AAPL) - Past 30 days:")
        );
        assert!(output.text.contains("Trend Analysis: Sentiment is improving in recent coverage."));

        let structured = output.structured.unwrap();
        assert_eq!(structured["status"], "report");
        assert_eq!(structured["total_count"], 6);
        assert_eq!(structured["trend"], "improving");
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let mut source = MockArticleSource::new();
        source.expect_search().returning(|_| Ok(Vec::new()));

        let tool = SentimentAnalysisTool::new(Arc::new(engine(source, resolver_for(None))));
        let output = tool
            .execute(json!({"company_ticker": "ZZZZ", "days": 14}))
            .await
            .unwrap();
        assert_eq!(
            output.text,
            "No news found for ZZZZ in the past 14 days to analyze sentiment."
        );
        assert_eq!(output.structured.unwrap()["status"], "no_news");
    }
}
