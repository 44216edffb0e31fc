//! The moderation pipeline.
//!
//! Classifier, redactor, and confidence estimator run as independent passes
//! over the input and are assembled into one [`ClassificationResult`].

use once_cell::sync::Lazy;

use crate::classifier::{ClassificationResult, TieredClassifier};
use crate::config::ModerationConfig;
use crate::confidence;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::redactor::Redactor;

/// Shared pipeline with the default configuration.
static DEFAULT_MODERATOR: Lazy<Moderator<'static>> = Lazy::new(Moderator::default);

/// Stateless moderation pipeline.
///
/// Holds only read-only configuration and a borrowed lexicon, so one
/// instance can serve any number of threads.
#[derive(Clone, Copy)]
pub struct Moderator<'a> {
    config: ModerationConfig,
    classifier: TieredClassifier<'a>,
    redactor: Redactor<'a>,
}

impl Moderator<'static> {
    /// Creates a moderator over the bundled lexicon.
    pub fn new(config: ModerationConfig) -> Result<Self> {
        Moderator::with_lexicon(config, Lexicon::bundled())
    }

    /// Returns the shared default moderator.
    pub fn shared() -> &'static Moderator<'static> {
        &DEFAULT_MODERATOR
    }
}

impl Default for Moderator<'static> {
    fn default() -> Self {
        Self::build(ModerationConfig::default(), Lexicon::bundled())
    }
}

impl<'a> Moderator<'a> {
    /// Creates a moderator over a custom lexicon.
    pub fn with_lexicon(config: ModerationConfig, lexicon: &'a Lexicon) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, lexicon))
    }

    fn build(config: ModerationConfig, lexicon: &'a Lexicon) -> Self {
        Self {
            config,
            classifier: TieredClassifier::with_lexicon(lexicon),
            redactor: Redactor::with_lexicon(lexicon).with_mask(config.mask_char),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Moderates one piece of text.
    ///
    /// Empty text returns the clean result without scanning.
    pub fn analyze(&self, text: &str) -> ClassificationResult {
        if text.is_empty() {
            return ClassificationResult::clean(text);
        }

        let scan = self.classifier.classify(text);
        let redacted_text = self.redactor.redact(text);
        let confidence = confidence::estimate(
            text,
            scan.flagged_terms.len(),
            self.config.confidence_floor,
            self.config.ratio_weight,
        );

        tracing::trace!(
            len = text.len(),
            tier = %scan.severity_tier,
            flagged = scan.flagged_terms.len(),
            confidence,
            "analyzed text"
        );

        ClassificationResult {
            contains_profanity: scan.contains_profanity,
            contains_hate_speech: scan.contains_hate_speech,
            severity_tier: scan.severity_tier,
            flagged_terms: scan.flagged_terms,
            redacted_text,
            confidence,
        }
    }

    /// Masks offensive terms without classifying.
    pub fn redact(&self, text: &str) -> String {
        self.redactor.redact(text)
    }

    /// Moderates text that may be absent. Absent text is clean.
    pub fn analyze_optional(&self, text: Option<&str>) -> ClassificationResult {
        match text {
            Some(text) => self.analyze(text),
            None => ClassificationResult::clean(String::new()),
        }
    }
}

/// Moderates text with the default configuration.
pub fn analyze(text: &str) -> ClassificationResult {
    Moderator::shared().analyze(text)
}

/// Moderates text that may be absent, with the default configuration.
pub fn analyze_optional(text: Option<&str>) -> ClassificationResult {
    Moderator::shared().analyze_optional(text)
}
