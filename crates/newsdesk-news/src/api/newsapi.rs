//! NewsAPI client (`/v2/everything`)

use crate::config::{NewsConfig, exponential_backoff};
use crate::error::{NewsError, Result};
use crate::model::{Article, ArticleQuery};
use crate::source::ArticleSource;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Raw `/everything` response; success and error share the envelope
#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            source_name: raw.source.and_then(|s| s.name),
            published_at: raw.published_at,
            url: raw.url,
        }
    }
}

/// NewsAPI client with rate limiting and retry of transient failures
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
    rate_limiter: SharedRateLimiter,
    max_attempts: u32,
    retry_backoff_base: Duration,
}

impl NewsApiClient {
    /// Create a client from configuration
    ///
    /// Fails when the API key is missing or the HTTP client cannot be built.
    pub fn from_config(config: &NewsConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| NewsError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_minute(
            NonZeroU32::new(config.rate_limit_per_minute).unwrap_or(NonZeroU32::MIN),
        );

        Ok(Self {
            client,
            endpoint: format!(
                "{}/everything",
                config.news_api_base_url.trim_end_matches('/')
            ),
            api_key,
            language: config.language.clone(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            max_attempts: config.max_retries.saturating_add(1),
            retry_backoff_base: config.retry_backoff_base,
        })
    }

    /// Search articles, retrying transient failures with exponential backoff
    pub async fn everything(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        let mut attempt = 0;
        loop {
            match self.everything_once(query).await {
                Ok(articles) => return Ok(articles),
                Err(e) if e.is_transient() && attempt + 1 < self.max_attempts => {
                    let backoff = exponential_backoff(self.retry_backoff_base, attempt);
                    tracing::warn!(
                        query = %query.query,
                        attempt = attempt + 1,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "NewsAPI request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn everything_once(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        let page_size = query.page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query.query.as_str()),
                ("language", self.language.as_str()),
                ("sortBy", query.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_server_error() {
            return Err(NewsError::HttpStatus {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: EverythingResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(NewsError::HttpStatus {
                    status: status.as_u16(),
                    message: body.chars().take(200).collect(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if parsed.status != "ok" {
            return Err(NewsError::ProviderStatus {
                code: parsed.code,
                message: parsed
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        tracing::debug!(
            query = %query.query,
            count = parsed.articles.len(),
            "NewsAPI returned articles"
        );

        Ok(parsed.articles.into_iter().map(Article::from).collect())
    }
}

/// Best-effort message from an error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<EverythingResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[async_trait]
impl ArticleSource for NewsApiClient {
    async fn search(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        self.everything(query).await
    }
}
