//! Tiered text classification.
//!
//! This module assigns a single severity tier to free text and collects the
//! lexicon terms that decided it.

mod result;
mod tiered;

pub use result::{ClassificationResult, SeverityTier};
pub use tiered::{TierScan, TieredClassifier};

/// Classifies text against the bundled lexicon.
pub fn classify(text: &str) -> TierScan {
    TieredClassifier::new().classify(text)
}
