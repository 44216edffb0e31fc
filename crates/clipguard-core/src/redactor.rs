//! Whole-word redaction.
//!
//! The redactor re-scans the original text against the full lexicon on its
//! own. It is a superset safety pass: it masks every whole-word lexicon term,
//! including catch-all terms the tiered classifier never flags, and skips
//! terms the classifier found only as substrings of longer words.

use crate::config::DEFAULT_MASK_CHAR;
use crate::lexicon::Lexicon;

/// Masks lexicon terms with a fixed character.
#[derive(Clone, Copy)]
pub struct Redactor<'a> {
    lexicon: &'a Lexicon,
    mask: char,
}

impl Redactor<'static> {
    /// Creates a redactor over the bundled lexicon using `*`.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::bundled())
    }
}

impl Default for Redactor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Redactor<'a> {
    /// Creates a redactor over a custom lexicon using `*`.
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            mask: DEFAULT_MASK_CHAR,
        }
    }

    /// Sets the mask character.
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Returns the mask character.
    pub fn mask(&self) -> char {
        self.mask
    }

    /// Redacts `original`, preserving its character count.
    pub fn redact(&self, original: &str) -> String {
        self.lexicon.redact_with(original, self.mask)
    }
}

/// Redacts text against the bundled lexicon with `*`.
pub fn redact(original: &str) -> String {
    Redactor::new().redact(original)
}
