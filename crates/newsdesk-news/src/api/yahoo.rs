//! Yahoo Finance symbol search, used to turn tickers into company names

use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::source::TickerResolver;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Debug, Deserialize)]
struct SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    shortname: Option<String>,
    #[serde(default)]
    longname: Option<String>,
}

impl SearchQuote {
    fn display_name(&self) -> Option<&str> {
        self.shortname
            .as_deref()
            .or(self.longname.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Yahoo Finance search client
#[derive(Debug, Clone)]
pub struct YahooTickerResolver {
    client: Client,
    search_url: String,
}

impl YahooTickerResolver {
    /// Create a resolver from configuration
    pub fn from_config(config: &NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NewsError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            search_url: config.ticker_search_url.clone(),
        })
    }

    /// Look up the short name of a ticker
    ///
    /// Only the quote whose symbol matches the ticker (ignoring case) counts;
    /// `Ok(None)` when there is no such quote or it carries no name.
    pub async fn short_name(&self, ticker: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", ticker), ("quotesCount", "5"), ("newsCount", "0")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NewsError::HttpStatus {
                status: response.status().as_u16(),
                message: format!("ticker search failed for {ticker}"),
            });
        }

        let data: SearchResponse = response.json().await?;

        let name = data
            .quotes
            .iter()
            .find(|q| {
                q.symbol
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(ticker))
            })
            .and_then(SearchQuote::display_name)
            .map(ToString::to_string);

        Ok(name)
    }
}

#[async_trait]
impl TickerResolver for YahooTickerResolver {
    async fn resolve(&self, ticker: &str) -> Result<Option<String>> {
        self.short_name(ticker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer) -> YahooTickerResolver {
        let config = NewsConfig {
            ticker_search_url: format!("{}/v1/finance/search", server.uri()),
            ..NewsConfig::default()
        };
        YahooTickerResolver::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_prefers_exact_symbol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/finance/search"))
            .and(query_param("q", "AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [
                    {"symbol": "AAPL.MX", "shortname": "APPLE INC MX"},
                    {"symbol": "AAPL", "shortname": "Apple Inc.", "longname": "Apple Inc."}
                ]
            })))
            .mount(&server)
            .await;

        let name = resolver_for(&server).resolve("AAPL").await.unwrap();
        assert_eq!(name.as_deref(), Some("Apple Inc."));
    }

    #[tokio::test]
    async fn test_other_symbols_are_not_used() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/finance/search"))
            .and(query_param("q", "ZZZZ"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [
                    {"symbol": "ZZLL", "shortname": "Zillow Group"},
                    {"symbol": "ZZ", "longname": "Example Holdings"}
                ]
            })))
            .mount(&server)
            .await;

        assert_eq!(resolver_for(&server).resolve("ZZZZ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_exact_symbol_without_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quotes": [
                    {"symbol": "EXMPL", "shortname": "  "},
                    {"symbol": "EXMPL.L", "shortname": "Example plc"}
                ]
            })))
            .mount(&server)
            .await;

        assert_eq!(resolver_for(&server).resolve("exmpl").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_quotes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"quotes": []})))
            .mount(&server)
            .await;

        assert_eq!(resolver_for(&server).resolve("NOPE").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = resolver_for(&server).resolve("AAPL").await.unwrap_err();
        assert!(matches!(err, NewsError::HttpStatus { status: 429, .. }));
    }
}
