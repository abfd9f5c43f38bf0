//! Article and query types shared by the adapters and the engine

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article as returned by the article source
///
/// Providers routinely omit fields (a missing description is common), so
/// every text field is optional. Scoring treats missing text as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source_name: Option<String>,
    /// Publish timestamp as sent by the provider (RFC 3339)
    pub published_at: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// Create an article from its title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_name = Some(source.into());
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Text used for both sentiment scoring and mention extraction:
    /// `title + ". " + description`
    pub fn content(&self) -> String {
        format!(
            "{}. {}",
            self.title.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
    }

    /// Date-only part of the publish timestamp
    ///
    /// Keeps the provider's own offset, so the result is the `YYYY-MM-DD`
    /// prefix of the timestamp. Unparseable timestamps are cut to their
    /// first ten characters.
    pub fn published_date(&self) -> Option<String> {
        let raw = self.published_at.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(ts.format("%Y-%m-%d").to_string()),
            Err(_) => Some(raw.chars().take(10).collect()),
        }
    }
}

/// A company subject of a per-company query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Ticker as supplied by the caller
    pub ticker: String,
    /// Resolved short name, or the ticker when resolution failed
    pub name: String,
}

impl Company {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
        }
    }

    /// Company whose name could not be resolved
    pub fn unresolved(ticker: impl Into<String>) -> Self {
        let ticker = ticker.into();
        Self {
            name: ticker.clone(),
            ticker,
        }
    }
}

/// Result ordering requested from the article source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    PublishedAt,
    /// Most popular sources and publishers first
    Popularity,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PublishedAt => "publishedAt",
            Self::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search request sent to an article source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub query: String,
    pub sort_by: SortOrder,
    pub page_size: u32,
}

impl ArticleQuery {
    pub fn new(query: impl Into<String>, sort_by: SortOrder, page_size: u32) -> Self {
        Self {
            query: query.into(),
            sort_by,
            page_size,
        }
    }
}
