//! Output rendering and exit codes.

use std::fmt::Write;

use clipguard_core::{
    decide, ClassificationResult, ModerationAction, ScreeningReport, TierBadge,
};
use serde::Serialize;

/// Exit code when content is published.
pub const EXIT_PUBLISH: u8 = 0;
/// Exit code when content is rejected.
pub const EXIT_REJECT: u8 = 2;
/// Exit code when content needs review.
pub const EXIT_REVIEW: u8 = 3;

/// Maps an action to the process exit code.
pub fn exit_code(action: ModerationAction) -> u8 {
    match action {
        ModerationAction::Publish => EXIT_PUBLISH,
        ModerationAction::Reject => EXIT_REJECT,
        ModerationAction::Review => EXIT_REVIEW,
    }
}

/// Machine-readable form of a single analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisOutput<'a> {
    #[serde(flatten)]
    pub result: &'a ClassificationResult,
    pub action: ModerationAction,
    pub badge: TierBadge,
}

impl<'a> AnalysisOutput<'a> {
    pub fn new(result: &'a ClassificationResult) -> Self {
        Self {
            result,
            action: decide(result),
            badge: result.severity_tier.badge(),
        }
    }
}

/// Renders one analysis as JSON.
pub fn analysis_json(result: &ClassificationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&AnalysisOutput::new(result))
}

/// Renders one analysis for a terminal.
pub fn analysis_summary(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tier:       {}", result.severity_tier.name());
    let _ = writeln!(out, "Action:     {}", decide(result).name());
    let _ = writeln!(out, "Confidence: {:.2}", result.confidence);
    if result.has_flagged_terms() {
        let _ = writeln!(out, "Flagged:    {}", result.flagged_terms.join(", "));
    }
    let _ = write!(out, "Redacted:   {}", result.redacted_text);
    out
}

/// Renders a screening report for a terminal.
pub fn screening_summary(report: &ScreeningReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Decision: {} (highest tier: {})",
        report.action.name(),
        report.highest_tier.name()
    );
    for field in &report.fields {
        let _ = write!(
            out,
            "\n  {} #{}: {} -> {}",
            field.field.name(),
            field.index,
            field.result.severity_tier.name(),
            field.action.name()
        );
        if field.result.has_flagged_terms() {
            let _ = write!(out, " [{}]", field.result.flagged_terms.join(", "));
        }
    }
    out
}
