//! Fixtures shared by the unit tests of this crate

use crate::model::{Article, Company};
use crate::sentiment::{PolarityModel, SentimentScorer};
use std::sync::Arc;

/// Reads the polarity from the last token of the text
///
/// Fixture articles carry their polarity as the description, so
/// `"headline. 0.4"` scores 0.4. Anything unparseable scores 0.0.
pub(crate) struct TrailingNumberPolarity;

impl PolarityModel for TrailingNumberPolarity {
    fn polarity(&self, text: &str) -> f64 {
        text.split_whitespace()
            .last()
            .and_then(|token| token.parse().ok())
            .unwrap_or(0.0)
    }
}

pub(crate) fn scorer() -> SentimentScorer {
    SentimentScorer::new(Arc::new(TrailingNumberPolarity))
}

/// Article whose scored polarity is `polarity`
pub(crate) fn article(title: &str, polarity: f64) -> Article {
    Article::new(title, format!("{polarity}"))
        .with_source("Newswire")
        .with_published_at("2024-05-01T12:00:00Z")
        .with_url(format!("https://news.example.com/{}", title.len()))
}

/// Articles with the given polarities, newest first
pub(crate) fn articles(polarities: &[f64]) -> Vec<Article> {
    polarities
        .iter()
        .enumerate()
        .map(|(i, p)| article(&format!("story {i}"), *p))
        .collect()
}

pub(crate) fn apple() -> Company {
    Company::new("AAPL", "Apple Inc.")
}
