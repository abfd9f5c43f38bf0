//! Financial news intelligence for newsdesk
//!
//! This crate turns news search results into three analyses for LLM agents:
//!
//! - a per-company news digest with per-article sentiment
//! - a per-company sentiment report with bucket counts and a recent trend
//! - a market "buzz" ranking of the organizations mentioned most often
//!
//! # Architecture
//!
//! - [`source`]: the `ArticleSource` and `TickerResolver` capabilities
//! - [`api`]: NewsAPI and Yahoo symbol search implementations of them
//! - [`sentiment`] and [`entities`]: pure scoring and mention extraction
//! - [`engine`]: pure aggregations plus the async [`NewsEngine`] facade
//! - [`tools`] and [`prompts`]: MCP tools and prompt templates
//!
//! # Example
//!
//! ```rust,ignore
//! use newsdesk_news::{NewsConfig, NewsEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = NewsEngine::from_config(NewsConfig::from_env()?)?;
//!
//!     match engine.sentiment_analysis("AAPL", 30).await {
//!         Ok(report) => println!("{report}"),
//!         Err(failure) => println!("{failure}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod model;
pub mod prompts;
pub mod sentiment;
pub mod source;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::NewsConfig;
pub use engine::{
    MarketBuzz, NewsDigest, NewsEngine, Operation, OperationFailure, SentimentOutcome,
};
pub use error::{NewsError, Result};
pub use model::{Article, ArticleQuery, Company, SortOrder};
pub use prompts::NewsAnalystPrompt;
pub use sentiment::{SentimentLabel, SentimentScore, SentimentScorer};
pub use source::{ArticleSource, TickerResolver};
pub use tools::register_news_tools;
