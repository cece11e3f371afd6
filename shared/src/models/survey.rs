//! Survey and question models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generated survey entity
///
/// The `id` is a local sequential token (`survey_1`, `survey_2`, ...)
/// assigned at generation time, before any remote id exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub name: String,
    /// Remote survey type (always "link" for generated surveys)
    #[serde(rename = "type")]
    pub survey_type: String,
    pub questions: Vec<Question>,
    /// Lifecycle status (e.g., "inProgress")
    pub status: String,
    pub thank_you_card: ThankYouNote,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single survey question, immutable once generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub headline: String,
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Question type tag plus type-specific parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    /// Numeric scale with endpoint labels
    #[serde(rename = "rating")]
    Rating { range: u32, labels: ScaleLabels },
    /// Fixed choice list, single-select by default
    #[serde(rename = "multipleChoice")]
    MultipleChoice { choices: Vec<String> },
    /// Free text with a placeholder
    #[serde(rename = "openText")]
    OpenText { placeholder: String },
}

impl QuestionKind {
    /// Remote type tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rating { .. } => "rating",
            Self::MultipleChoice { .. } => "multipleChoice",
            Self::OpenText { .. } => "openText",
        }
    }
}

/// Endpoint labels for a rating scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleLabels {
    pub left: String,
    pub right: String,
}

/// Thank-you card copy attached to a generated survey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThankYouNote {
    pub headline: String,
    pub subheader: String,
}
