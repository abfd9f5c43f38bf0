//! Per-company sentiment report and trend detection

use serde::Serialize;
use std::fmt;

use crate::model::{Article, Company};
use crate::sentiment::{SentimentLabel, SentimentScorer};

/// Smallest batch for which a trend is reported
pub const MIN_TREND_ARTICLES: usize = 6;

/// Mean difference between halves that counts as a shift
pub const TREND_THRESHOLD: f64 = 0.1;

/// Direction of sentiment between the recent and the older half of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn sentence(self) -> &'static str {
        match self {
            Self::Improving => "Sentiment is improving in recent coverage.",
            Self::Declining => "Sentiment is declining in recent coverage.",
            Self::Stable => "Sentiment has remained stable over the analyzed period.",
        }
    }
}

/// Aggregate sentiment over one article batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub company: Company,
    pub window_days: u32,
    pub overall_label: SentimentLabel,
    pub overall_score: f64,
    pub total_count: usize,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl SentimentReport {
    /// Share of `count` in the batch, in percent
    pub fn percentage(&self, count: usize) -> f64 {
        count as f64 / self.total_count as f64 * 100.0
    }
}

/// Result of a sentiment analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentimentOutcome {
    /// The source returned no articles
    NoNews { company: Company, window_days: u32 },
    Report(SentimentReport),
}

/// Score every article of the batch and aggregate
pub fn report(
    company: &Company,
    window_days: u32,
    articles: &[Article],
    scorer: &SentimentScorer,
) -> SentimentOutcome {
    if articles.is_empty() {
        return SentimentOutcome::NoNews {
            company: company.clone(),
            window_days,
        };
    }

    let polarities: Vec<f64> = articles
        .iter()
        .map(|a| scorer.polarity(&a.content()))
        .collect();

    let overall_score = mean(&polarities);

    let mut positive_count = 0;
    let mut neutral_count = 0;
    let mut negative_count = 0;
    for &p in &polarities {
        match SentimentLabel::from_polarity(p) {
            SentimentLabel::Positive => positive_count += 1,
            SentimentLabel::Neutral => neutral_count += 1,
            SentimentLabel::Negative => negative_count += 1,
        }
    }

    SentimentOutcome::Report(SentimentReport {
        company: company.clone(),
        window_days,
        overall_label: SentimentLabel::from_polarity(overall_score),
        overall_score,
        total_count: polarities.len(),
        positive_count,
        neutral_count,
        negative_count,
        trend: detect_trend(&polarities),
    })
}

/// Compare the first half of the batch (recent) against the rest (older)
///
/// Polarities must be in source order, newest first. With an odd count the
/// older half holds the extra article. Returns `None` below
/// [`MIN_TREND_ARTICLES`].
pub fn detect_trend(polarities: &[f64]) -> Option<Trend> {
    if polarities.len() < MIN_TREND_ARTICLES {
        return None;
    }

    let (recent, older) = polarities.split_at(polarities.len() / 2);
    let recent_avg = mean(recent);
    let older_avg = mean(older);

    let trend = if recent_avg > older_avg + TREND_THRESHOLD {
        Trend::Improving
    } else if recent_avg < older_avg - TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    };
    Some(trend)
}

/// Arithmetic mean; callers guarantee a non-empty slice
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl fmt::Display for SentimentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = match self {
            Self::NoNews {
                company,
                window_days,
            } => {
                return write!(
                    f,
                    "No news found for {} in the past {} days to analyze sentiment.",
                    company.name, window_days
                );
            }
            Self::Report(report) => report,
        };

        write!(
            f,
            "Sentiment Analysis for {} ({}) - Past {} days:\n\n",
            report.company.name, report.company.ticker, report.window_days
        )?;
        writeln!(
            f,
            "Overall Sentiment: {} (Score: {:.2})",
            report.overall_label, report.overall_score
        )?;
        writeln!(f, "Total Articles Analyzed: {}", report.total_count)?;
        for (name, count) in [
            ("Positive", report.positive_count),
            ("Neutral", report.neutral_count),
            ("Negative", report.negative_count),
        ] {
            writeln!(
                f,
                "{name} Articles: {count} ({:.1}%)",
                report.percentage(count)
            )?;
        }

        if let Some(trend) = report.trend {
            write!(f, "\nTrend Analysis: {}\n", trend.sentence())?;
        }

        Ok(())
    }
}
