//! Policy predicates over classification results.
//!
//! These decide what the upstream workflow does with a piece of content:
//! reject it outright, hold it for human review, or let it through.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationResult, SeverityTier};

/// Action the upstream workflow should take.
///
/// Variants are ordered from least to most restrictive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    /// Store or publish the content.
    #[default]
    Publish,
    /// Route the content to a human reviewer first.
    Review,
    /// Refuse the content.
    Reject,
}

impl ModerationAction {
    /// Returns a human-readable name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            ModerationAction::Publish => "Publish",
            ModerationAction::Review => "Review",
            ModerationAction::Reject => "Reject",
        }
    }
}

/// Returns true if the content must be refused.
pub fn should_block(result: &ClassificationResult) -> bool {
    result.severity_tier == SeverityTier::Blocked || result.contains_hate_speech
}

/// Returns true if the content needs human review.
pub fn should_require_review(result: &ClassificationResult) -> bool {
    result.severity_tier == SeverityTier::Severe || result.contains_hate_speech
}

/// Folds both predicates into a single action. Blocking wins over review.
pub fn decide(result: &ClassificationResult) -> ModerationAction {
    if should_block(result) {
        ModerationAction::Reject
    } else if should_require_review(result) {
        ModerationAction::Review
    } else {
        ModerationAction::Publish
    }
}
