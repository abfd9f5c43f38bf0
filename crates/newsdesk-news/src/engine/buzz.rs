//! Market buzz: organizations ranked by mention count

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::entities::extract_mentions;
use crate::model::Article;
use crate::sentiment::{SentimentScore, SentimentScorer};

/// Entities returned by default
pub const DEFAULT_BUZZ_LIMIT: usize = 5;

/// Mentions of one extracted name across a batch
///
/// Every mention records the polarity of the article it came from, so the
/// mention count is the length of `sentiments`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMention {
    name: String,
    sentiments: Vec<f64>,
}

impl EntityMention {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sentiments: Vec::new(),
        }
    }

    pub fn record(&mut self, polarity: f64) {
        self.sentiments.push(polarity);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> usize {
        self.sentiments.len()
    }

    pub fn sentiments(&self) -> &[f64] {
        &self.sentiments
    }

    /// Mean polarity over this entity's mentions
    pub fn average_sentiment(&self) -> SentimentScore {
        if self.sentiments.is_empty() {
            return SentimentScore::neutral();
        }
        let avg = self.sentiments.iter().sum::<f64>() / self.sentiments.len() as f64;
        SentimentScore::from_polarity(avg)
    }
}

/// One ranked entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuzzEntry {
    pub rank: usize,
    pub name: String,
    pub mentions: usize,
    pub sentiment: SentimentScore,
}

/// Result of a market buzz ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketBuzz {
    /// The source returned no articles
    NoArticles { window_days: u32 },
    /// Articles were found but no candidate survived extraction
    NoMentions { window_days: u32 },
    Ranked {
        window_days: u32,
        entries: Vec<BuzzEntry>,
    },
}

/// Extract and score every article, accumulating mentions by exact name
///
/// The result is in first-seen order.
pub fn accumulate_mentions(articles: &[Article], scorer: &SentimentScorer) -> Vec<EntityMention> {
    let mut mentions: Vec<EntityMention> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let content = article.content();
        let names = extract_mentions(&content);
        if names.is_empty() {
            continue;
        }

        let polarity = scorer.polarity(&content);
        for name in names {
            let idx = *index.entry(name).or_insert_with_key(|name| {
                mentions.push(EntityMention::new(name.clone()));
                mentions.len() - 1
            });
            mentions[idx].record(polarity);
        }
    }

    mentions
}

/// Order by mention count, descending, and keep the top `limit`
///
/// `sort_by` is stable, so equal counts keep their first-seen order.
pub fn rank_mentions(mut mentions: Vec<EntityMention>, limit: usize) -> Vec<EntityMention> {
    mentions.sort_by(|a, b| b.count().cmp(&a.count()));
    mentions.truncate(limit);
    mentions
}

/// Rank the organizations mentioned most in a market-wide batch
pub fn buzz(
    window_days: u32,
    articles: &[Article],
    limit: usize,
    scorer: &SentimentScorer,
) -> MarketBuzz {
    if articles.is_empty() {
        return MarketBuzz::NoArticles { window_days };
    }

    let mentions = accumulate_mentions(articles, scorer);
    if mentions.is_empty() {
        return MarketBuzz::NoMentions { window_days };
    }

    let entries = rank_mentions(mentions, limit)
        .into_iter()
        .enumerate()
        .map(|(i, m)| BuzzEntry {
            rank: i + 1,
            mentions: m.count(),
            sentiment: m.average_sentiment(),
            name: m.name,
        })
        .collect();

    MarketBuzz::Ranked {
        window_days,
        entries,
    }
}

impl fmt::Display for MarketBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArticles { window_days } => write!(
                f,
                "No market news found for the past {window_days} days."
            ),
            Self::NoMentions { .. } => {
                f.write_str("No significant company mentions found in recent market news.")
            }
            Self::Ranked {
                window_days,
                entries,
            } => {
                write!(
                    f,
                    "Top Companies in Market News (Past {window_days} days):\n\n"
                )?;
                for entry in entries {
                    writeln!(f, "{}. {}", entry.rank, entry.name)?;
                    writeln!(f, "   Mentions: {}", entry.mentions)?;
                    write!(
                        f,
                        "   Overall Sentiment: {} ({:.2})\n\n",
                        entry.sentiment.label, entry.sentiment.polarity
                    )?;
                }
                Ok(())
            }
        }
    }
}
