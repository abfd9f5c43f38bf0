//! Organization-like mention extraction
//!
//! A candidate is a maximal run of two or more whitespace separated tokens
//! that each start with an ASCII uppercase letter, optionally joined by a
//! literal `&` (`Johnson & Johnson`). There is no tagging and no gazetteer:
//!
//! - any two adjacent capitalized words match, so sentence starts
//!   (`The Fed`), people (`Jerome Powell`) and places (`Wall Street`) are
//!   counted as well;
//! - a lowercase connective ends a run, so `Bank of America` yields nothing;
//! - a single capitalized word (`Apple`) never matches on its own;
//! - punctuation ends a run, so `Apple Inc.` yields `Apple Inc`.

use regex::Regex;
use std::sync::LazyLock;

/// Candidates this short or shorter (after trimming) are discarded
pub const MIN_MENTION_CHARS: usize = 2;

static ORG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]*(?:\s+(?:&\s+)?[A-Z][a-zA-Z]*)+)\b")
        .expect("organization pattern is valid")
});

/// Extract organization-like candidates from `text`
///
/// Returns every match in order of appearance; repeated names are kept so
/// that each occurrence counts as one mention.
pub fn extract_mentions(text: &str) -> Vec<String> {
    ORG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|candidate| is_significant(candidate))
        .map(ToString::to_string)
        .collect()
}

fn is_significant(candidate: &str) -> bool {
    candidate.trim().chars().count() > MIN_MENTION_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_connective_breaks_run() {
        let mentions = extract_mentions("Bank of America reported gains while Apple Inc. fell");
        assert_eq!(mentions, vec!["Apple Inc"]);
    }

    #[test]
    fn test_capitalized_run_matches() {
        let mentions = extract_mentions("Shares of Bank Of America rose");
        assert_eq!(mentions, vec!["Bank Of America"]);
    }

    #[test]
    fn test_single_word_is_not_a_mention() {
        assert!(extract_mentions("Apple fell sharply").is_empty());
        assert!(extract_mentions("shares of apple inc fell").is_empty());
        assert!(extract_mentions("").is_empty());
    }

    #[test]
    fn test_ampersand_join() {
        let mentions = extract_mentions("Johnson & Johnson and Procter & Gamble both beat");
        assert_eq!(mentions, vec!["Johnson & Johnson", "Procter & Gamble"]);
    }

    #[test]
    fn test_maximal_run() {
        let mentions = extract_mentions("the Federal Reserve Chair Jerome Powell spoke");
        assert_eq!(mentions, vec!["Federal Reserve Chair Jerome Powell"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mentions = extract_mentions(
            "Goldman Sachs upgraded Morgan Stanley. Later Goldman Sachs cut its target",
        );
        assert_eq!(
            mentions,
            vec!["Goldman Sachs", "Morgan Stanley", "Later Goldman Sachs"]
        );
    }

    #[test]
    fn test_sentence_boundary_stops_run() {
        let mentions = extract_mentions("Tesla Motors. Ford Motor rallied");
        assert_eq!(mentions, vec!["Tesla Motors", "Ford Motor"]);
    }

    #[test]
    fn test_known_false_positives() {
        let mentions = extract_mentions("Stocks fell on Wall Street as The Fed met");
        assert_eq!(mentions, vec!["Wall Street", "The Fed"]);
    }

    #[test]
    fn test_length_filter() {
        assert!(!is_significant("Q"));
        assert!(!is_significant(" AB "));
        assert!(is_significant("A B"));
    }

    #[test]
    fn test_deterministic() {
        let text = "Meta Platforms and Alphabet Inc led the Nasdaq Composite higher";
        assert_eq!(extract_mentions(text), extract_mentions(text));
    }
}
