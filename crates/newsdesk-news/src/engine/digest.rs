//! Per-company news digest

use serde::Serialize;
use std::fmt;

use crate::model::{Article, Company};
use crate::sentiment::{SentimentScore, SentimentScorer};

/// Articles rendered by default in a digest
pub const DEFAULT_DIGEST_LIMIT: usize = 10;

/// One rendered article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestEntry {
    /// 1-based position in the digest
    pub index: usize,
    pub title: String,
    pub source: String,
    pub date: String,
    pub sentiment: SentimentScore,
    pub url: String,
}

/// Most recent articles for a company with per-article sentiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsDigest {
    pub company: Company,
    pub window_days: u32,
    /// Articles returned by the source, before the limit was applied
    pub fetched: usize,
    pub entries: Vec<DigestEntry>,
}

/// Build a digest from the first `limit` articles, in source order
///
/// The source already sorts by recency; no re-sorting happens here.
pub fn digest(
    company: &Company,
    window_days: u32,
    articles: &[Article],
    limit: usize,
    scorer: &SentimentScorer,
) -> NewsDigest {
    let entries = articles
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, article)| DigestEntry {
            index: i + 1,
            title: article
                .title
                .clone()
                .unwrap_or_else(|| "No title".to_string()),
            source: article
                .source_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            date: article
                .published_date()
                .unwrap_or_else(|| "Unknown date".to_string()),
            sentiment: scorer.score(&article.content()),
            url: article.url.clone().unwrap_or_else(|| "No URL".to_string()),
        })
        .collect();

    NewsDigest {
        company: company.clone(),
        window_days,
        fetched: articles.len(),
        entries,
    }
}

impl fmt::Display for NewsDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fetched == 0 {
            return write!(
                f,
                "No recent news found for {} in the past {} days.",
                self.company.name, self.window_days
            );
        }

        write!(
            f,
            "Recent News for {} ({}) - Last {} days:\n\n",
            self.company.name, self.company.ticker, self.window_days
        )?;

        for entry in &self.entries {
            writeln!(f, "{}. {}", entry.index, entry.title)?;
            writeln!(f, "   Source: {}", entry.source)?;
            writeln!(f, "   Date: {}", entry.date)?;
            writeln!(
                f,
                "   Sentiment: {} ({:.2})",
                entry.sentiment.label, entry.sentiment.polarity
            )?;
            write!(f, "   URL: {}\n\n", entry.url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentLabel;
    use crate::testing::{apple, article, articles, scorer};

    #[test]
    fn test_empty_batch_message() {
        let d = digest(&apple(), 7, &[], DEFAULT_DIGEST_LIMIT, &scorer());
        assert!(d.entries.is_empty());
        assert_eq!(
            d.to_string(),
            "No recent news found for Apple Inc. in the past 7 days."
        );
    }

    #[test]
    fn test_limit_keeps_source_order() {
        let batch = articles(&[0.1, 0.5, -0.6, 0.0]);
        let d = digest(&apple(), 7, &batch, 2, &scorer());

        assert_eq!(d.fetched, 4);
        assert_eq!(d.entries.len(), 2);
        assert_eq!(d.entries[0].title, "story 0");
        assert_eq!(d.entries[1].title, "story 1");
        assert_eq!(d.entries[1].index, 2);
        assert_eq!(d.entries[1].sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_rendered_block() {
        let batch = vec![
            article("Apple unveils new chips", 0.456)
                .with_source("Reuters")
                .with_published_at("2024-05-01T23:59:00Z")
                .with_url("https://example.com/chips"),
        ];
        let d = digest(&apple(), 7, &batch, DEFAULT_DIGEST_LIMIT, &scorer());

        assert_eq!(
            d.to_string(),
            "Recent News for Apple Inc. (AAPL) - Last 7 days:\n\n\
             1. Apple unveils new chips\n\
             \x20  Source: Reuters\n\
             \x20  Date: 2024-05-01\n\
             \x20  Sentiment: Positive (0.46)\n\
             \x20  URL: https://example.com/chips\n\n"
        );
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let batch = vec![crate::model::Article::default()];
        let d = digest(&apple(), 3, &batch, DEFAULT_DIGEST_LIMIT, &scorer());

        let entry = &d.entries[0];
        assert_eq!(entry.title, "No title");
        assert_eq!(entry.source, "Unknown");
        assert_eq!(entry.date, "Unknown date");
        assert_eq!(entry.url, "No URL");
        assert_eq!(entry.sentiment.polarity, 0.0);
        assert_eq!(entry.sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_zero_limit_renders_header_only() {
        let d = digest(&apple(), 7, &articles(&[0.3]), 0, &scorer());
        assert_eq!(
            d.to_string(),
            "Recent News for Apple Inc. (AAPL) - Last 7 days:\n\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let batch = articles(&[0.3, -0.4, 0.0]);
        let first = digest(&apple(), 7, &batch, DEFAULT_DIGEST_LIMIT, &scorer());
        let second = digest(&apple(), 7, &batch, DEFAULT_DIGEST_LIMIT, &scorer());
        assert_eq!(first.to_string(), second.to_string());
    }
}
