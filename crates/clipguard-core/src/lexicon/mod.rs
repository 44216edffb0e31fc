//! Static offensive-term lexicon.
//!
//! One canonical list of tagged terms is compiled once into:
//!
//! - a read-only index per tiered category (mild, severe, hate)
//! - a read-only union index over every term (the catch-all)
//! - one case-insensitive matcher per term for whole-word redaction
//!
//! Two matching modes are supported and deliberately kept apart:
//! [`MatchMode::SubstringContains`] drives classification and
//! [`MatchMode::WholeWordBounded`] drives redaction.

mod terms;

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder, RegexSet};
use serde::{Deserialize, Serialize};

use crate::error::{ModerationError, Result};

pub use terms::BUNDLED;

/// Process-wide lexicon built from [`BUNDLED`].
static LEXICON: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::compile(BUNDLED).expect("bundled lexicon terms are valid literals"));

/// Category a lexicon term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconCategory {
    /// Mild insults.
    Mild,
    /// Severe profanity.
    Severe,
    /// Hate speech.
    Hate,
    /// Only in the catch-all union, never tiered.
    General,
}

impl LexiconCategory {
    /// Categories scanned by the tiered classifier, in priority order.
    pub fn tiered() -> &'static [LexiconCategory] {
        &[
            LexiconCategory::Hate,
            LexiconCategory::Severe,
            LexiconCategory::Mild,
        ]
    }

    /// Returns a human-readable name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            LexiconCategory::Mild => "Mild",
            LexiconCategory::Severe => "Severe",
            LexiconCategory::Hate => "Hate",
            LexiconCategory::General => "General",
        }
    }
}

/// A single lowercase term and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexiconEntry {
    pub term: &'static str,
    pub category: LexiconCategory,
}

impl LexiconEntry {
    /// Creates a new entry.
    pub const fn new(term: &'static str, category: LexiconCategory) -> Self {
        Self { term, category }
    }
}

/// How a term is matched against text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring test, ignoring word boundaries.
    SubstringContains,
    /// Case-insensitive match bounded by non-word characters or string edges.
    WholeWordBounded,
}

/// Terms of one index plus a regex set for substring scans.
///
/// Scans run on lowercased text, so the patterns are plain escaped literals.
struct TermIndex {
    terms: Vec<&'static str>,
    set: RegexSet,
}

impl TermIndex {
    fn compile(terms: Vec<&'static str>) -> Result<Self> {
        let set = RegexSet::new(terms.iter().map(|t| regex::escape(t)))?;
        Ok(Self { terms, set })
    }

    /// Returns every term contained in `lowered`, in declaration order.
    fn find_in(&self, lowered: &str) -> Vec<&'static str> {
        self.set
            .matches(lowered)
            .into_iter()
            .map(|idx| self.terms[idx])
            .collect()
    }

    fn is_match(&self, lowered: &str) -> bool {
        self.set.is_match(lowered)
    }
}

/// Compiled, immutable lexicon.
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_category: HashMap<LexiconCategory, TermIndex>,
    union: TermIndex,
    /// Whole-word matchers, parallel to `entries`.
    word_matchers: Vec<Regex>,
}

impl Lexicon {
    /// Compiles a lexicon from tagged entries.
    ///
    /// Terms must be non-empty, lowercase, and unique across categories.
    pub fn compile(entries: &[LexiconEntry]) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.term.trim().is_empty() {
                return Err(ModerationError::InvalidTerm("empty term".to_string()));
            }
            if entry.term != entry.term.to_lowercase() {
                return Err(ModerationError::InvalidTerm(format!(
                    "{:?} is not lowercase",
                    entry.term
                )));
            }
            if !seen.insert(entry.term) {
                return Err(ModerationError::InvalidTerm(format!(
                    "{:?} is declared more than once",
                    entry.term
                )));
            }
        }

        let mut by_category = HashMap::new();
        for category in LexiconCategory::tiered() {
            let terms = entries
                .iter()
                .filter(|e| e.category == *category)
                .map(|e| e.term)
                .collect();
            by_category.insert(*category, TermIndex::compile(terms)?);
        }

        let union = TermIndex::compile(entries.iter().map(|e| e.term).collect())?;

        let word_matchers = entries
            .iter()
            .map(|e| {
                RegexBuilder::new(&regex::escape(e.term))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(
            hate = by_category[&LexiconCategory::Hate].terms.len(),
            severe = by_category[&LexiconCategory::Severe].terms.len(),
            mild = by_category[&LexiconCategory::Mild].terms.len(),
            total = entries.len(),
            "compiled lexicon"
        );

        Ok(Self {
            entries: entries.to_vec(),
            by_category,
            union,
            word_matchers,
        })
    }

    /// Returns the process-wide bundled lexicon.
    pub fn bundled() -> &'static Lexicon {
        &LEXICON
    }

    /// Returns all entries in declaration order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Returns the terms of a category in declaration order.
    pub fn terms(&self, category: LexiconCategory) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.term)
            .collect()
    }

    /// Returns every term in the catch-all union, in declaration order.
    pub fn all_terms(&self) -> &[&'static str] {
        &self.union.terms
    }

    /// Looks up the category of a term.
    pub fn category_of(&self, term: &str) -> Option<LexiconCategory> {
        let term = term.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.category)
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no terms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring test against the catch-all union.
    pub fn contains_any(&self, text: &str) -> bool {
        self.contains_any_lowered(&text.to_lowercase())
    }

    /// Substring test of the catch-all union against already-lowercased text.
    pub fn contains_any_lowered(&self, lowered: &str) -> bool {
        self.union.is_match(lowered)
    }

    /// Returns the terms of a tiered category contained in already-lowercased
    /// text, in declaration order.
    ///
    /// [`LexiconCategory::General`] has no tiered index and always yields
    /// nothing.
    pub fn scan_category(&self, lowered: &str, category: LexiconCategory) -> Vec<&'static str> {
        self.by_category
            .get(&category)
            .map(|index| index.find_in(lowered))
            .unwrap_or_default()
    }

    /// Tests a single lexicon term against `text` in the given mode.
    ///
    /// Returns false for terms not in this lexicon.
    pub fn matches(&self, text: &str, term: &str, mode: MatchMode) -> bool {
        let term = term.to_lowercase();
        let Some(pos) = self.entries.iter().position(|e| e.term == term) else {
            return false;
        };

        match mode {
            MatchMode::SubstringContains => text.to_lowercase().contains(&term),
            MatchMode::WholeWordBounded => {
                !whole_word_spans(&self.word_matchers[pos], text).is_empty()
            }
        }
    }

    /// Masks every whole-word occurrence of every term with `*`.
    pub fn redact(&self, text: &str) -> String {
        self.redact_with(text, '*')
    }

    /// Masks every whole-word occurrence of every term with `mask`.
    ///
    /// Terms are applied one after another in declaration order, each on the
    /// output of the previous one. Each masked span has the same number of
    /// characters as the text it replaces.
    pub fn redact_with(&self, text: &str, mask: char) -> String {
        let mut redacted = text.to_string();
        for matcher in &self.word_matchers {
            let spans = whole_word_spans(matcher, &redacted);
            if !spans.is_empty() {
                redacted = mask_spans(&redacted, &spans, mask);
            }
        }
        redacted
    }
}

/// Checks whether the query text contains any catch-all term.
pub fn contains_any(text: &str) -> bool {
    Lexicon::bundled().contains_any(text)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Finds non-overlapping matches of `matcher` that sit on word boundaries.
///
/// A rejected candidate is retried one character later so a bounded
/// occurrence overlapping it is still found.
fn whole_word_spans(matcher: &Regex, text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;

    while start <= text.len() {
        let Some(m) = matcher.find_at(text, start) else {
            break;
        };

        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let bounded = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);

        if bounded && !m.range().is_empty() {
            spans.push(m.range());
            start = m.end();
        } else {
            start = m.start()
                + text[m.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
    }

    spans
}

/// Replaces each span with `mask` repeated once per character of the span.
fn mask_spans(text: &str, spans: &[Range<usize>], mask: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        let width = text[span.clone()].chars().count();
        out.extend(std::iter::repeat(mask).take(width));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}
