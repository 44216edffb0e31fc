//! Confidence estimation from flagged-word density.
//!
//! Confidence is a heuristic, not a probability: it falls as the share of
//! flagged terms among the words of the text grows.

use crate::config::{DEFAULT_CONFIDENCE_FLOOR, DEFAULT_RATIO_WEIGHT};

/// Estimates confidence with the default floor and weight.
///
/// Returns `1.0` for text without words, otherwise
/// `max(0.1, 1.0 - flagged / words * 0.5)`.
pub fn confidence(text: &str, flagged_terms: &[String]) -> f32 {
    estimate(
        text,
        flagged_terms.len(),
        DEFAULT_CONFIDENCE_FLOOR,
        DEFAULT_RATIO_WEIGHT,
    )
}

/// Estimates confidence for `flagged` tiered hits in `text`.
pub fn estimate(text: &str, flagged: usize, floor: f32, weight: f32) -> f32 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 1.0;
    }

    let ratio = flagged as f32 / words as f32;
    (1.0 - ratio * weight).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn no_words_is_full_confidence() {
        assert_eq!(confidence("", &[]), 1.0);
        assert_eq!(confidence("  \n\t ", &flagged(&["idiot"])), 1.0);
    }

    #[test]
    fn nothing_flagged_is_full_confidence() {
        assert_eq!(confidence("a perfectly fine sentence", &[]), 1.0);
    }

    #[test]
    fn ratio_lowers_confidence() {
        // 2 of 7 words flagged
        let c = confidence("You are an idiot and this sucks", &flagged(&["idiot", "sucks"]));
        assert!((c - (1.0 - (2.0 / 7.0) * 0.5)).abs() < 1e-6);
    }

    #[test]
    fn whitespace_runs_count_once() {
        let c = confidence("idiot    sucks", &flagged(&["idiot"]));
        assert!((c - 0.75).abs() < 1e-6);
    }

    #[test]
    fn never_below_floor() {
        // Substring hits can outnumber words.
        let c = confidence("fucking", &flagged(&["fucking", "fuck", "x", "y"]));
        assert_eq!(c, 0.1);
    }

    #[test]
    fn monotonically_non_increasing() {
        let text = "one two three four five six seven eight nine ten";
        let mut previous = f32::MAX;
        for n in 0..=30 {
            let c = estimate(text, n, 0.1, 0.5);
            assert!(c <= previous);
            assert!(c >= 0.1);
            previous = c;
        }
    }

    #[test]
    fn custom_floor_and_weight() {
        assert!((estimate("a b", 2, 0.3, 1.0) - 0.3).abs() < 1e-6);
        assert_eq!(estimate("a b", 2, 0.3, 0.0), 1.0);
    }
}
