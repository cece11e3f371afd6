//! Response model and submission outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer to a single question, numeric or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
}

/// Generated survey response
///
/// `survey_id` and `user_id` reference local generated ids; they are mapped
/// to remote ids at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    pub survey_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Question id -> answer value
    pub data: BTreeMap<String, AnswerValue>,
    /// Time to complete, in seconds
    pub ttc: u32,
}

/// A response plus its submission result
///
/// Wraps a copy of the generated response; the original data files are never
/// mutated. An unresolved or rejected response is recorded with
/// `submitted: false`, never dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    #[serde(flatten)]
    pub response: SurveyResponse,
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_survey_id: Option<String>,
    /// Endpoint that accepted the submission, alt-format tagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_used: Option<String>,
    /// Local survey id the submission was resolved from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_from: Option<String>,
}

impl SubmissionOutcome {
    /// Record a response that could not be submitted
    pub fn unsubmitted(response: SurveyResponse) -> Self {
        Self {
            response,
            submitted: false,
            api_survey_id: None,
            endpoint_used: None,
            mapped_from: None,
        }
    }

    /// Record an accepted submission
    pub fn submitted(
        response: SurveyResponse,
        api_survey_id: String,
        endpoint_used: String,
        mapped_from: String,
    ) -> Self {
        Self {
            response,
            submitted: true,
            api_survey_id: Some(api_survey_id),
            endpoint_used: Some(endpoint_used),
            mapped_from: Some(mapped_from),
        }
    }
}
