//! Tunables for the moderation pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ModerationError, Result};

/// Default redaction mask character.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Lowest confidence the estimator will report by default.
pub const DEFAULT_CONFIDENCE_FLOOR: f32 = 0.1;

/// Default multiplier applied to the flagged-word ratio.
pub const DEFAULT_RATIO_WEIGHT: f32 = 0.5;

/// Configuration for a [`Moderator`](crate::Moderator).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON document such as `{"mask_char": "#"}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Character used to mask redacted terms.
    pub mask_char: char,
    /// Confidence never drops below this value. Must be at least
    /// [`DEFAULT_CONFIDENCE_FLOOR`].
    pub confidence_floor: f32,
    /// How strongly the flagged-word ratio lowers confidence.
    pub ratio_weight: f32,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            ratio_weight: DEFAULT_RATIO_WEIGHT,
        }
    }
}

impl ModerationConfig {
    /// Sets the mask character.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Sets the confidence floor.
    pub fn with_confidence_floor(mut self, floor: f32) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// Sets the ratio weight.
    pub fn with_ratio_weight(mut self, weight: f32) -> Self {
        self.ratio_weight = weight;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(DEFAULT_CONFIDENCE_FLOOR..=1.0).contains(&self.confidence_floor) {
            return Err(ModerationError::InvalidConfig(format!(
                "confidence_floor must be within [{}, 1.0], got {}",
                DEFAULT_CONFIDENCE_FLOOR, self.confidence_floor
            )));
        }

        if !self.ratio_weight.is_finite() || self.ratio_weight < 0.0 {
            return Err(ModerationError::InvalidConfig(format!(
                "ratio_weight must be a non-negative number, got {}",
                self.ratio_weight
            )));
        }

        // Masked spans must stay word boundaries for later terms.
        if self.mask_char.is_alphanumeric() || self.mask_char == '_' {
            return Err(ModerationError::InvalidConfig(format!(
                "mask_char must not be a word character, got {:?}",
                self.mask_char
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ModerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mask_char, '*');
        assert_eq!(config.confidence_floor, 0.1);
        assert_eq!(config.ratio_weight, 0.5);
    }

    #[test]
    fn rejects_floor_out_of_range() {
        let config = ModerationConfig::default().with_confidence_floor(1.5);
        assert!(matches!(
            config.validate(),
            Err(ModerationError::InvalidConfig(_))
        ));

        let config = ModerationConfig::default().with_confidence_floor(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_floor_below_default_minimum() {
        assert!(ModerationConfig::default()
            .with_confidence_floor(0.05)
            .validate()
            .is_err());
        assert!(ModerationConfig::default()
            .with_confidence_floor(0.0)
            .validate()
            .is_err());
        assert!(ModerationConfig::default()
            .with_confidence_floor(DEFAULT_CONFIDENCE_FLOOR)
            .validate()
            .is_ok());
        assert!(ModerationConfig::default()
            .with_confidence_floor(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_negative_or_nan_weight() {
        assert!(ModerationConfig::default()
            .with_ratio_weight(-1.0)
            .validate()
            .is_err());
        assert!(ModerationConfig::default()
            .with_ratio_weight(f32::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_word_character_mask() {
        assert!(ModerationConfig::default()
            .with_mask_char('x')
            .validate()
            .is_err());
        assert!(ModerationConfig::default()
            .with_mask_char('#')
            .validate()
            .is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ModerationConfig = serde_json::from_str(r##"{"mask_char": "#"}"##).unwrap();
        assert_eq!(config.mask_char, '#');
        assert_eq!(config.confidence_floor, DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(config.ratio_weight, DEFAULT_RATIO_WEIGHT);
    }
}
