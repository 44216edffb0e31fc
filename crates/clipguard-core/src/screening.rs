//! Screening of user-submitted content before it is stored or published.
//!
//! Every text field of a submission (title, description, comments) is run
//! through the pipeline on its own. The submission as a whole gets the most
//! restrictive action of any field:
//!
//! 1. Any rejected field rejects the submission
//! 2. Otherwise any field needing review holds it for review
//! 3. Otherwise it is published

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationResult, SeverityTier};
use crate::moderator::Moderator;
use crate::policy::{decide, ModerationAction};

/// Which part of a submission a text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    /// Video title.
    Title,
    /// Video description.
    Description,
    /// A comment on the video.
    Comment,
}

impl ContentField {
    /// Returns a human-readable name for this field.
    pub fn name(&self) -> &'static str {
        match self {
            ContentField::Title => "Title",
            ContentField::Description => "Description",
            ContentField::Comment => "Comment",
        }
    }
}

/// User-supplied text attached to one piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSubmission {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl ContentSubmission {
    /// Creates a submission with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            comments: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Returns every present field with its position among fields of the
    /// same kind.
    pub fn fields(&self) -> Vec<(ContentField, usize, &str)> {
        let mut fields = vec![(ContentField::Title, 0, self.title.as_str())];
        if let Some(description) = &self.description {
            fields.push((ContentField::Description, 0, description.as_str()));
        }
        fields.extend(
            self.comments
                .iter()
                .enumerate()
                .map(|(i, c)| (ContentField::Comment, i, c.as_str())),
        );
        fields
    }
}

/// Outcome for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub field: ContentField,
    /// Position among fields of the same kind (comment number).
    pub index: usize,
    pub result: ClassificationResult,
    pub action: ModerationAction,
}

/// Outcome for a whole submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Per-field outcomes in submission order.
    pub fields: Vec<FieldReport>,
    /// Most restrictive action over all fields.
    pub action: ModerationAction,
    /// Most severe tier over all fields.
    pub highest_tier: SeverityTier,
}

impl ScreeningReport {
    /// Returns the fields that were rejected.
    pub fn blocked_fields(&self) -> Vec<&FieldReport> {
        self.fields_with(ModerationAction::Reject)
    }

    /// Returns the fields that need review.
    pub fn review_fields(&self) -> Vec<&FieldReport> {
        self.fields_with(ModerationAction::Review)
    }

    /// Returns true if the submission can go out unchanged.
    pub fn is_publishable(&self) -> bool {
        self.action == ModerationAction::Publish
    }

    fn fields_with(&self, action: ModerationAction) -> Vec<&FieldReport> {
        self.fields.iter().filter(|f| f.action == action).collect()
    }
}

impl Moderator<'_> {
    /// Screens every field of a submission.
    pub fn screen(&self, submission: &ContentSubmission) -> ScreeningReport {
        let mut report = ScreeningReport::default();

        for (field, index, text) in submission.fields() {
            let result = self.analyze(text);
            let action = decide(&result);

            tracing::debug!(
                field = field.name(),
                index,
                len = text.len(),
                tier = %result.severity_tier,
                action = action.name(),
                "screened field"
            );

            report.action = report.action.max(action);
            report.highest_tier = report.highest_tier.max(result.severity_tier);
            report.fields.push(FieldReport {
                field,
                index,
                result,
                action,
            });
        }

        tracing::info!(
            fields = report.fields.len(),
            tier = %report.highest_tier,
            action = report.action.name(),
            "screened submission"
        );

        report
    }
}

/// Screens a submission with the default configuration.
pub fn screen(submission: &ContentSubmission) -> ScreeningReport {
    Moderator::shared().screen(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_submission_publishes() {
        let submission = ContentSubmission::new("Sourdough in ten steps")
            .with_description("Flour, water, salt and patience.")
            .with_comment("Great video, thanks!");
        let report = screen(&submission);

        assert_eq!(report.fields.len(), 3);
        assert_eq!(report.action, ModerationAction::Publish);
        assert_eq!(report.highest_tier, SeverityTier::Clean);
        assert!(report.is_publishable());
        assert!(report.blocked_fields().is_empty());
    }

    #[test]
    fn worst_field_decides() {
        let submission = ContentSubmission::new("My trip")
            .with_description("what a stupid trip")
            .with_comment("nice")
            .with_comment("this is shit");
        let report = screen(&submission);

        assert_eq!(report.action, ModerationAction::Review);
        assert_eq!(report.highest_tier, SeverityTier::Severe);

        let review = report.review_fields();
        assert_eq!(review.len(), 1);
        assert_eq!(review[0].field, ContentField::Comment);
        assert_eq!(review[0].index, 1);
    }

    #[test]
    fn hate_in_any_field_rejects() {
        let submission = ContentSubmission::new("Cooking show")
            .with_description("shit happens")
            .with_comment("heil hitler");
        let report = screen(&submission);

        assert_eq!(report.action, ModerationAction::Reject);
        assert_eq!(report.highest_tier, SeverityTier::Blocked);
        assert_eq!(report.blocked_fields().len(), 1);
        assert_eq!(report.review_fields().len(), 1);
        assert!(!report.is_publishable());
    }

    #[test]
    fn mild_and_moderate_still_publish() {
        let submission = ContentSubmission::new("damn good tacos").with_comment("you idiot");
        let report = screen(&submission);

        assert_eq!(report.action, ModerationAction::Publish);
        assert_eq!(report.highest_tier, SeverityTier::Moderate);
    }

    #[test]
    fn empty_title_is_clean() {
        let report = screen(&ContentSubmission::default());
        assert_eq!(report.fields.len(), 1);
        assert_eq!(report.fields[0].result, ClassificationResult::clean(""));
        assert_eq!(report.action, ModerationAction::Publish);
    }

    #[test]
    fn fields_are_listed_in_order() {
        let submission = ContentSubmission::new("t")
            .with_description("d")
            .with_comment("c0")
            .with_comment("c1");
        let fields: Vec<_> = submission
            .fields()
            .into_iter()
            .map(|(f, i, _)| (f, i))
            .collect();
        assert_eq!(
            fields,
            vec![
                (ContentField::Title, 0),
                (ContentField::Description, 0),
                (ContentField::Comment, 0),
                (ContentField::Comment, 1),
            ]
        );
    }

    #[test]
    fn submission_deserializes_without_optional_fields() {
        let submission: ContentSubmission =
            serde_json::from_str(r#"{"title": "hello"}"#).unwrap();
        assert_eq!(submission, ContentSubmission::new("hello"));
    }
}
