//! Configuration for news retrieval and analysis

use crate::error::{NewsError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// NewsAPI caps `pageSize` at 100
pub const MAX_PAGE_SIZE: u32 = 100;

/// Market-wide query used for buzz ranking
pub const DEFAULT_BUZZ_QUERY: &str =
    "stock market OR financial markets OR Wall Street OR NYSE OR NASDAQ";

const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_TICKER_SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// Configuration for news operations
///
/// Built once at startup and handed to the adapters; nothing below this
/// struct reads the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// NewsAPI key
    pub news_api_key: Option<String>,

    /// NewsAPI base URL (the `/everything` endpoint is appended)
    pub news_api_base_url: String,

    /// Ticker search endpoint used to resolve company names
    pub ticker_search_url: String,

    /// Article language filter
    pub language: String,

    /// Page size for the per-company digest
    pub company_news_page_size: u32,

    /// Page size for the per-company sentiment report
    pub sentiment_page_size: u32,

    /// Page size for market buzz
    pub buzz_page_size: u32,

    /// Query used for market buzz
    pub buzz_query: String,

    /// Outbound NewsAPI requests per minute
    pub rate_limit_per_minute: u32,

    /// Retries after a transient failure, on top of the first attempt
    pub max_retries: u32,

    /// Initial backoff duration for retries
    pub retry_backoff_base: Duration,

    /// Request timeout duration
    pub request_timeout: Duration,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
            ticker_search_url: DEFAULT_TICKER_SEARCH_URL.to_string(),
            language: "en".to_string(),
            company_news_page_size: 10,
            sentiment_page_size: 100,
            buzz_page_size: 100,
            buzz_query: DEFAULT_BUZZ_QUERY.to_string(),
            rate_limit_per_minute: 60,
            max_retries: 3,
            retry_backoff_base: Duration::from_millis(500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl NewsConfig {
    /// Create a new configuration builder
    pub fn builder() -> NewsConfigBuilder {
        NewsConfigBuilder::default()
    }

    /// Build a configuration from environment variables
    ///
    /// Reads `NEWS_API_KEY` (required), and optionally `NEWS_API_BASE_URL`
    /// and `TICKER_SEARCH_URL`.
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// API key, or a configuration error when it is missing
    pub fn api_key(&self) -> Result<&str> {
        self.news_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| NewsError::ConfigError("NEWS_API_KEY is not set".to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.api_key()?;

        for (name, value) in [
            ("news_api_base_url", &self.news_api_base_url),
            ("ticker_search_url", &self.ticker_search_url),
        ] {
            Url::parse(value)
                .map_err(|e| NewsError::ConfigError(format!("{name} is not a valid URL: {e}")))?;
        }

        for (name, size) in [
            ("company_news_page_size", self.company_news_page_size),
            ("sentiment_page_size", self.sentiment_page_size),
            ("buzz_page_size", self.buzz_page_size),
        ] {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(NewsError::ConfigError(format!(
                    "{name} must be between 1 and {MAX_PAGE_SIZE}, got {size}"
                )));
            }
        }

        if self.rate_limit_per_minute == 0 {
            return Err(NewsError::ConfigError(
                "rate_limit_per_minute must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// `base * 2^attempt`, saturating
pub(crate) fn exponential_backoff(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2_u32.saturating_pow(attempt))
}

/// Builder for NewsConfig
#[derive(Debug, Default)]
pub struct NewsConfigBuilder {
    news_api_key: Option<String>,
    news_api_base_url: Option<String>,
    ticker_search_url: Option<String>,
    language: Option<String>,
    company_news_page_size: Option<u32>,
    sentiment_page_size: Option<u32>,
    buzz_page_size: Option<u32>,
    buzz_query: Option<String>,
    rate_limit_per_minute: Option<u32>,
    max_retries: Option<u32>,
    retry_backoff_base: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl NewsConfigBuilder {
    /// Set the NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set the NewsAPI base URL
    pub fn news_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.news_api_base_url = Some(url.into());
        self
    }

    /// Set the ticker search URL
    pub fn ticker_search_url(mut self, url: impl Into<String>) -> Self {
        self.ticker_search_url = Some(url.into());
        self
    }

    /// Set the article language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the digest page size
    pub fn company_news_page_size(mut self, size: u32) -> Self {
        self.company_news_page_size = Some(size);
        self
    }

    /// Set the sentiment report page size
    pub fn sentiment_page_size(mut self, size: u32) -> Self {
        self.sentiment_page_size = Some(size);
        self
    }

    /// Set the market buzz page size
    pub fn buzz_page_size(mut self, size: u32) -> Self {
        self.buzz_page_size = Some(size);
        self
    }

    /// Set the market buzz query
    pub fn buzz_query(mut self, query: impl Into<String>) -> Self {
        self.buzz_query = Some(query.into());
        self
    }

    /// Set the outbound rate limit
    pub fn rate_limit_per_minute(mut self, limit: u32) -> Self {
        self.rate_limit_per_minute = Some(limit);
        self
    }

    /// Set the number of retries for transient failures
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set retry backoff base duration
    pub fn retry_backoff_base(mut self, duration: Duration) -> Self {
        self.retry_backoff_base = Some(duration);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Load credentials and endpoint overrides from the environment
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var("NEWS_API_KEY") {
            self.news_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("NEWS_API_BASE_URL") {
            self.news_api_base_url = Some(url);
        }
        if let Ok(url) = std::env::var("TICKER_SEARCH_URL") {
            self.ticker_search_url = Some(url);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<NewsConfig> {
        let defaults = NewsConfig::default();

        let config = NewsConfig {
            news_api_key: self.news_api_key,
            news_api_base_url: self.news_api_base_url.unwrap_or(defaults.news_api_base_url),
            ticker_search_url: self.ticker_search_url.unwrap_or(defaults.ticker_search_url),
            language: self.language.unwrap_or(defaults.language),
            company_news_page_size: self
                .company_news_page_size
                .unwrap_or(defaults.company_news_page_size),
            sentiment_page_size: self
                .sentiment_page_size
                .unwrap_or(defaults.sentiment_page_size),
            buzz_page_size: self.buzz_page_size.unwrap_or(defaults.buzz_page_size),
            buzz_query: self.buzz_query.unwrap_or(defaults.buzz_query),
            rate_limit_per_minute: self
                .rate_limit_per_minute
                .unwrap_or(defaults.rate_limit_per_minute),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_backoff_base: self.retry_backoff_base.unwrap_or(defaults.retry_backoff_base),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}
