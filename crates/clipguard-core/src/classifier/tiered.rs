//! Tiered lexicon classifier.
//!
//! Scans lowercased text against the lexicon in a fixed priority order:
//!
//! 1. Hate speech. Any hit blocks and ends the tiered scan.
//! 2. Severe profanity, unless already blocked.
//! 3. Mild insults, only while the text is still clean.
//! 4. Catch-all fallback over the whole union. Untiered hits on otherwise
//!    clean text are surfaced as [`SeverityTier::Moderate`].
//!
//! Every pass is exhaustive: all terms of the winning category are collected.
//! Matching is substring based and ignores word boundaries.

use super::SeverityTier;
use crate::lexicon::{Lexicon, LexiconCategory};

/// Tier and flag outcome of the classification scan.
///
/// Redaction and confidence are layered on top by the
/// [`Moderator`](crate::Moderator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierScan {
    /// True if any tiered or catch-all term was found.
    pub contains_profanity: bool,
    /// True if a hate-speech term was found.
    pub contains_hate_speech: bool,
    /// Severity decided by the cascade.
    pub severity_tier: SeverityTier,
    /// Tiered hits in detection order.
    pub flagged_terms: Vec<String>,
    /// True if the catch-all union matched anything.
    pub catch_all_hit: bool,
}

impl TierScan {
    fn flag(&mut self, tier: SeverityTier, hits: Vec<&'static str>) {
        self.contains_profanity = true;
        self.severity_tier = tier;
        self.flagged_terms
            .extend(hits.into_iter().map(str::to_string));
    }
}

/// Substring-based tiered classifier over a [`Lexicon`].
#[derive(Clone, Copy)]
pub struct TieredClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl TieredClassifier<'static> {
    /// Creates a classifier over the bundled lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::bundled(),
        }
    }
}

impl Default for TieredClassifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TieredClassifier<'a> {
    /// Creates a classifier over a custom lexicon.
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the lexicon this classifier scans.
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Classifies text into a tier and collects flagged terms.
    ///
    /// Empty text short-circuits to a clean scan.
    pub fn classify(&self, text: &str) -> TierScan {
        if text.is_empty() {
            return TierScan::default();
        }

        let lowered = text.to_lowercase();
        let mut scan = TierScan::default();

        let hate = self.lexicon.scan_category(&lowered, LexiconCategory::Hate);
        if !hate.is_empty() {
            scan.contains_hate_speech = true;
            scan.flag(SeverityTier::Blocked, hate);
        }

        if scan.severity_tier != SeverityTier::Blocked {
            let severe = self.lexicon.scan_category(&lowered, LexiconCategory::Severe);
            if !severe.is_empty() {
                scan.flag(SeverityTier::Severe, severe);
            }
        }

        if scan.severity_tier == SeverityTier::Clean {
            let mild = self.lexicon.scan_category(&lowered, LexiconCategory::Mild);
            if !mild.is_empty() {
                scan.flag(SeverityTier::Mild, mild);
            }
        }

        // Fallback runs regardless of the tiered outcome.
        scan.catch_all_hit = self.lexicon.contains_any_lowered(&lowered);
        if scan.catch_all_hit && scan.severity_tier == SeverityTier::Clean {
            scan.severity_tier = SeverityTier::Moderate;
            scan.contains_profanity = true;
        }

        tracing::trace!(
            tier = %scan.severity_tier,
            flagged = scan.flagged_terms.len(),
            catch_all = scan.catch_all_hit,
            "tiered scan complete"
        );

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;

    fn classifier() -> TieredClassifier<'static> {
        TieredClassifier::new()
    }

    // === Short Circuit Tests ===

    #[test]
    fn empty_text_is_clean() {
        let scan = classifier().classify("");
        assert_eq!(scan, TierScan::default());
        assert_eq!(scan.severity_tier, SeverityTier::Clean);
    }

    #[test]
    fn whitespace_text_is_clean() {
        let scan = classifier().classify("   \t\n");
        assert_eq!(scan.severity_tier, SeverityTier::Clean);
        assert!(!scan.contains_profanity);
    }

    // === Hate Pass Tests ===

    #[test]
    fn hate_term_blocks() {
        let scan = classifier().classify("they chanted white power at the rally");
        assert_eq!(scan.severity_tier, SeverityTier::Blocked);
        assert!(scan.contains_hate_speech);
        assert!(scan.contains_profanity);
        assert_eq!(scan.flagged_terms, vec!["white power"]);
    }

    #[test]
    fn hate_pass_skips_severe_and_mild() {
        let scan = classifier().classify("Master Race, you stupid fucking idiot");
        assert_eq!(scan.severity_tier, SeverityTier::Blocked);
        assert_eq!(scan.flagged_terms, vec!["master race"]);
    }

    #[test]
    fn hate_pass_collects_every_hit_in_lexicon_order() {
        let scan = classifier().classify("ethnic cleansing for the master race");
        assert_eq!(scan.flagged_terms, vec!["master race", "ethnic cleansing"]);
    }

    // === Severe Pass Tests ===

    #[test]
    fn severe_term_without_hate() {
        let scan = classifier().classify("I will kill this fucking moron");
        assert_eq!(scan.severity_tier, SeverityTier::Severe);
        assert!(scan.contains_profanity);
        assert!(!scan.contains_hate_speech);
        // Substring scan reports the shorter form too; the mild pass is skipped.
        assert_eq!(scan.flagged_terms, vec!["fucking", "fuck"]);
    }

    #[test]
    fn severe_is_case_insensitive() {
        let scan = classifier().classify("SHIT happens");
        assert_eq!(scan.severity_tier, SeverityTier::Severe);
        assert_eq!(scan.flagged_terms, vec!["shit"]);
    }

    // === Mild Pass Tests ===

    #[test]
    fn mild_terms_only() {
        let scan = classifier().classify("You are an idiot and this sucks");
        assert_eq!(scan.severity_tier, SeverityTier::Mild);
        assert!(scan.contains_profanity);
        assert_eq!(scan.flagged_terms, vec!["idiot", "sucks"]);
    }

    #[test]
    fn mild_matches_inside_words() {
        // No word boundaries in the classification scan.
        let scan = classifier().classify("idiotic plan");
        assert_eq!(scan.severity_tier, SeverityTier::Mild);
        assert_eq!(scan.flagged_terms, vec!["idiot"]);
    }

    // === Fallback Tests ===

    #[test]
    fn untiered_term_is_moderate() {
        let scan = classifier().classify("damn, that was close");
        assert_eq!(scan.severity_tier, SeverityTier::Moderate);
        assert!(scan.contains_profanity);
        assert!(scan.catch_all_hit);
        assert!(scan.flagged_terms.is_empty());
    }

    #[test]
    fn fallback_does_not_downgrade_tiered_result() {
        let scan = classifier().classify("damn you idiot");
        assert_eq!(scan.severity_tier, SeverityTier::Mild);
        assert!(scan.catch_all_hit);
        assert_eq!(scan.flagged_terms, vec!["idiot"]);
    }

    #[test]
    fn fallback_on_mixed_case_input() {
        let scan = classifier().classify("Well DAMN");
        assert_eq!(scan.severity_tier, SeverityTier::Moderate);
        assert!(scan.catch_all_hit);
    }

    #[test]
    fn fallback_with_custom_lexicon() {
        let entries = [
            LexiconEntry::new("gosh", LexiconCategory::General),
            LexiconEntry::new("dang", LexiconCategory::Mild),
        ];
        let lexicon = Lexicon::compile(&entries).unwrap();
        let classifier = TieredClassifier::with_lexicon(&lexicon);
        assert!(std::ptr::eq(classifier.lexicon(), &lexicon));

        assert_eq!(
            classifier.classify("oh gosh").severity_tier,
            SeverityTier::Moderate
        );
        assert_eq!(
            classifier.classify("dang it").severity_tier,
            SeverityTier::Mild
        );
        assert_eq!(
            classifier.classify("oh well").severity_tier,
            SeverityTier::Clean
        );
    }

    // === Clean Tests ===

    #[test]
    fn clean_sentence() {
        let scan = classifier().classify("A relaxing video about baking bread at home");
        assert_eq!(scan.severity_tier, SeverityTier::Clean);
        assert!(!scan.contains_profanity);
        assert!(!scan.catch_all_hit);
        assert!(scan.flagged_terms.is_empty());
    }

    #[test]
    fn default_classifier_uses_bundled_lexicon() {
        assert!(std::ptr::eq(classifier().lexicon(), Lexicon::bundled()));
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "what a stupid damn idea";
        assert_eq!(classifier().classify(text), classifier().classify(text));
    }
}
