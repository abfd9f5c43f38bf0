//! Capabilities the engine consumes: article search and ticker resolution

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Article, ArticleQuery, Company};

/// A news search provider
///
/// Implementations return articles in the order the provider sorted them.
/// A non-success provider status must be reported as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn search(&self, query: &ArticleQuery) -> Result<Vec<Article>>;
}

/// Ticker to company-name lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TickerResolver: Send + Sync {
    /// Resolve a ticker to a company short name; `Ok(None)` when unknown
    async fn resolve(&self, ticker: &str) -> Result<Option<String>>;
}

/// Resolve a ticker, falling back to the ticker itself on any failure
pub async fn resolve_company(resolver: &dyn TickerResolver, ticker: &str) -> Company {
    match resolver.resolve(ticker).await {
        Ok(Some(name)) if !name.trim().is_empty() => Company::new(ticker, name),
        Ok(_) => {
            tracing::debug!(ticker, "no company name found, using ticker");
            Company::unresolved(ticker)
        }
        Err(e) => {
            tracing::debug!(ticker, error = %e, "ticker resolution failed, using ticker");
            Company::unresolved(ticker)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsError;

    #[tokio::test]
    async fn test_resolved_name() {
        let mut resolver = MockTickerResolver::new();
        resolver
            .expect_resolve()
            .withf(|t| t == "AAPL")
            .returning(|_| Ok(Some("Apple Inc.".to_string())));

        let company = resolve_company(&resolver, "AAPL").await;
        assert_eq!(company, Company::new("AAPL", "Apple Inc."));
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_ticker() {
        let mut resolver = MockTickerResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| {
                Err(NewsError::HttpStatus {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                })
            });

        let company = resolve_company(&resolver, "MSFT").await;
        assert_eq!(company, Company::unresolved("MSFT"));
    }

    #[tokio::test]
    async fn test_unknown_and_blank_fall_back_to_ticker() {
        let mut resolver = MockTickerResolver::new();
        resolver.expect_resolve().times(1).returning(|_| Ok(None));
        assert_eq!(
            resolve_company(&resolver, "ZZZZ").await,
            Company::unresolved("ZZZZ")
        );

        let mut resolver = MockTickerResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Ok(Some("  ".to_string())));
        assert_eq!(
            resolve_company(&resolver, "ZZZZ").await,
            Company::unresolved("ZZZZ")
        );
    }
}
