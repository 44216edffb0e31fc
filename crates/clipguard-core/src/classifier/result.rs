//! Severity tiers and the per-call classification result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModerationError;

/// Overall severity assigned to a piece of text.
///
/// Variants are ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Nothing offensive found.
    #[default]
    Clean,
    /// Mild insults only.
    Mild,
    /// Catch-all profanity outside every tiered list.
    Moderate,
    /// Severe profanity.
    Severe,
    /// Hate speech. Always blocked.
    Blocked,
}

impl SeverityTier {
    /// Returns all tiers, least severe first.
    pub fn all() -> &'static [SeverityTier] {
        &[
            SeverityTier::Clean,
            SeverityTier::Mild,
            SeverityTier::Moderate,
            SeverityTier::Severe,
            SeverityTier::Blocked,
        ]
    }

    /// Returns the lowercase identifier used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Clean => "clean",
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Severe => "severe",
            SeverityTier::Blocked => "blocked",
        }
    }

    /// Returns a human-readable name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            SeverityTier::Clean => "Clean",
            SeverityTier::Mild => "Mild",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Severe => "Severe",
            SeverityTier::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = ModerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SeverityTier::all()
            .iter()
            .copied()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| ModerationError::UnknownTier(s.to_string()))
    }
}

/// Result of moderating one piece of text.
///
/// Built fresh by every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// True if any tiered or catch-all term was found.
    pub contains_profanity: bool,
    /// True if a hate-speech term was found.
    pub contains_hate_speech: bool,
    /// Overall severity.
    pub severity_tier: SeverityTier,
    /// Terms found by the tiered passes, in detection order.
    pub flagged_terms: Vec<String>,
    /// Input text with whole-word lexicon terms masked.
    pub redacted_text: String,
    /// Heuristic confidence in `[floor, 1.0]`, never below `0.1`.
    pub confidence: f32,
}

impl ClassificationResult {
    /// Creates the clean terminal result, echoing the text unchanged.
    pub fn clean(text: impl Into<String>) -> Self {
        Self {
            contains_profanity: false,
            contains_hate_speech: false,
            severity_tier: SeverityTier::Clean,
            flagged_terms: Vec::new(),
            redacted_text: text.into(),
            confidence: 1.0,
        }
    }

    /// Returns true if nothing offensive was found.
    pub fn is_clean(&self) -> bool {
        self.severity_tier == SeverityTier::Clean && !self.contains_profanity
    }

    /// Returns true if the tiered passes flagged anything.
    pub fn has_flagged_terms(&self) -> bool {
        !self.flagged_terms.is_empty()
    }
}
