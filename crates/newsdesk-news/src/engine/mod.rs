//! News intelligence engine
//!
//! Pure aggregation lives in [`digest`], [`report`] and [`buzz`]. The
//! [`NewsEngine`] ties them to an article source and a ticker resolver and
//! turns provider failures into an [`OperationFailure`] the tools render as
//! text.

pub mod buzz;
pub mod digest;
pub mod report;

pub use buzz::{BuzzEntry, DEFAULT_BUZZ_LIMIT, EntityMention, MarketBuzz};
pub use digest::{DEFAULT_DIGEST_LIMIT, DigestEntry, NewsDigest};
pub use report::{SentimentOutcome, SentimentReport, Trend};

use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

use crate::api::{NewsApiClient, YahooTickerResolver};
use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::model::{ArticleQuery, SortOrder};
use crate::sentiment::SentimentScorer;
use crate::source::{ArticleSource, TickerResolver, resolve_company};

/// Engine operation, used to name failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CompanyNews,
    SentimentAnalysis,
    MarketBuzz,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompanyNews => "company_news",
            Self::SentimentAnalysis => "sentiment_analysis",
            Self::MarketBuzz => "market_buzz",
        }
    }
}

/// A provider failure, tagged with the operation and its target
#[derive(Debug)]
pub struct OperationFailure {
    pub operation: Operation,
    /// Company name the operation was about; `None` for market-wide calls
    pub target: Option<String>,
    pub error: NewsError,
}

impl OperationFailure {
    fn new(operation: Operation, target: Option<String>, error: NewsError) -> Self {
        Self {
            operation,
            target,
            error,
        }
    }

    /// Structured form returned next to the text message
    pub fn to_json(&self) -> Value {
        json!({
            "status": "error",
            "operation": self.operation.as_str(),
            "target": self.target,
            "message": self.to_string(),
        })
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target.as_deref().unwrap_or_default();
        match self.operation {
            Operation::CompanyNews => {
                write!(f, "Error retrieving news for {target}: {}", self.error)
            }
            Operation::SentimentAnalysis => {
                write!(f, "Error analyzing sentiment for {target}: {}", self.error)
            }
            Operation::MarketBuzz => write!(f, "Error retrieving market buzz: {}", self.error),
        }
    }
}

impl std::error::Error for OperationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Async facade over the article source, the resolver and the aggregations
pub struct NewsEngine {
    source: Arc<dyn ArticleSource>,
    resolver: Arc<dyn TickerResolver>,
    scorer: SentimentScorer,
    config: Arc<NewsConfig>,
}

impl NewsEngine {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        resolver: Arc<dyn TickerResolver>,
        scorer: SentimentScorer,
        config: Arc<NewsConfig>,
    ) -> Self {
        Self {
            source,
            resolver,
            scorer,
            config,
        }
    }

    /// Engine backed by NewsAPI, Yahoo ticker search and the VADER scorer
    pub fn from_config(config: NewsConfig) -> Result<Self> {
        config.validate()?;
        let source = NewsApiClient::from_config(&config)?;
        let resolver = YahooTickerResolver::from_config(&config)?;
        Ok(Self::new(
            Arc::new(source),
            Arc::new(resolver),
            SentimentScorer::vader(),
            Arc::new(config),
        ))
    }

    /// Most recent articles about a company with per-article sentiment
    pub async fn company_news(
        &self,
        ticker: &str,
        days: u32,
    ) -> std::result::Result<NewsDigest, OperationFailure> {
        let company = resolve_company(self.resolver.as_ref(), ticker).await;
        let query = ArticleQuery::new(
            &company.name,
            SortOrder::PublishedAt,
            self.config.company_news_page_size,
        );

        match self.source.search(&query).await {
            Ok(articles) => {
                let result = digest::digest(
                    &company,
                    days,
                    &articles,
                    DEFAULT_DIGEST_LIMIT,
                    &self.scorer,
                );
                tracing::info!(
                    ticker,
                    company = %company.name,
                    fetched = result.fetched,
                    "company news digest built"
                );
                Ok(result)
            }
            Err(error) => {
                tracing::warn!(ticker, error = %error, "company news fetch failed");
                Err(OperationFailure::new(
                    Operation::CompanyNews,
                    Some(company.name),
                    error,
                ))
            }
        }
    }

    /// Aggregate sentiment, bucket counts and trend for a company
    pub async fn sentiment_analysis(
        &self,
        ticker: &str,
        days: u32,
    ) -> std::result::Result<SentimentOutcome, OperationFailure> {
        let company = resolve_company(self.resolver.as_ref(), ticker).await;
        let query = ArticleQuery::new(
            &company.name,
            SortOrder::PublishedAt,
            self.config.sentiment_page_size,
        );

        match self.source.search(&query).await {
            Ok(articles) => {
                tracing::info!(
                    ticker,
                    company = %company.name,
                    articles = articles.len(),
                    "sentiment analysis computed"
                );
                Ok(report::report(&company, days, &articles, &self.scorer))
            }
            Err(error) => {
                tracing::warn!(ticker, error = %error, "sentiment fetch failed");
                Err(OperationFailure::new(
                    Operation::SentimentAnalysis,
                    Some(company.name),
                    error,
                ))
            }
        }
    }

    /// Organizations mentioned most in market-wide coverage
    pub async fn market_buzz(
        &self,
        days: u32,
        limit: usize,
    ) -> std::result::Result<MarketBuzz, OperationFailure> {
        let query = ArticleQuery::new(
            &self.config.buzz_query,
            SortOrder::Popularity,
            self.config.buzz_page_size,
        );

        match self.source.search(&query).await {
            Ok(articles) => {
                tracing::info!(articles = articles.len(), limit, "market buzz ranked");
                Ok(buzz::buzz(days, &articles, limit, &self.scorer))
            }
            Err(error) => {
                tracing::warn!(error = %error, "market buzz fetch failed");
                Err(OperationFailure::new(Operation::MarketBuzz, None, error))
            }
        }
    }
}

impl fmt::Debug for NewsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsEngine")
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}
