//! Sentiment scoring
//!
//! Polarity comes from a pluggable [`PolarityModel`]; the labeling contract
//! on top of it is fixed: strictly above [`POSITIVE_THRESHOLD`] is positive,
//! strictly below [`NEGATIVE_THRESHOLD`] is negative, anything else neutral.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity above which text is labeled positive
pub const POSITIVE_THRESHOLD: f64 = 0.2;

/// Polarity below which text is labeled negative
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label a polarity using the fixed thresholds
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity in [-1, 1] and its label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub label: SentimentLabel,
}

impl SentimentScore {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }

    pub fn neutral() -> Self {
        Self::from_polarity(0.0)
    }
}

/// Source of raw polarity values
pub trait PolarityModel: Send + Sync {
    /// Polarity of `text`, expected in [-1, 1]
    fn polarity(&self, text: &str) -> f64;
}

/// VADER lexicon and rule based polarity (compound score)
pub struct VaderPolarity {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderPolarity {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for VaderPolarity {
    fn polarity(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

/// Maps text to a [`SentimentScore`]
#[derive(Clone)]
pub struct SentimentScorer {
    model: Arc<dyn PolarityModel>,
}

impl SentimentScorer {
    pub fn new(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    /// Scorer backed by the VADER model
    pub fn vader() -> Self {
        Self::new(Arc::new(VaderPolarity::new()))
    }

    /// Polarity of `text`, clamped to [-1, 1]
    ///
    /// Text without any alphanumeric character (including the `". "` built
    /// from an article with neither title nor description) scores 0.0.
    pub fn polarity(&self, text: &str) -> f64 {
        if !text.chars().any(char::is_alphanumeric) {
            return 0.0;
        }
        let polarity = self.model.polarity(text);
        if polarity.is_finite() {
            polarity.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        SentimentScore::from_polarity(self.polarity(text))
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::vader()
    }
}

impl fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentScorer").finish_non_exhaustive()
    }
}
