//! Remote API wire schema
//!
//! Typed request payloads in the shape the remote survey platform expects.
//! Field names are camelCase on the wire; headline/label/placeholder strings
//! are wrapped in localized `{ "default": ... }` objects.

use crate::models::{AnswerValue, Question, QuestionKind, Survey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized string wrapper (`{ "default": "..." }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localized {
    pub default: String,
}

impl Localized {
    pub fn new(s: impl Into<String>) -> Self {
        Self { default: s.into() }
    }

    pub fn empty() -> Self {
        Self::new("")
    }
}

/// A question in remote schema form
///
/// Multiple-choice questions are renamed `multipleChoiceMulti` on the wire
/// and carry their choices as `{id, label}` objects, single-select by
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireQuestion {
    #[serde(rename = "rating", rename_all = "camelCase")]
    Rating {
        id: String,
        headline: Localized,
        required: bool,
        is_draft: bool,
        logic: Vec<serde_json::Value>,
        scale: String,
        range: u32,
        labels: WireScaleLabels,
    },
    #[serde(rename = "multipleChoiceMulti", rename_all = "camelCase")]
    MultipleChoiceMulti {
        id: String,
        headline: Localized,
        required: bool,
        is_draft: bool,
        logic: Vec<serde_json::Value>,
        choices: Vec<WireChoice>,
        multi_select: bool,
        shuffle_option: String,
    },
    #[serde(rename = "openText", rename_all = "camelCase")]
    OpenText {
        id: String,
        headline: Localized,
        required: bool,
        is_draft: bool,
        logic: Vec<serde_json::Value>,
        placeholder: Localized,
        long_answer: bool,
        input_type: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireScaleLabels {
    pub left: Localized,
    pub right: Localized,
    pub center: Localized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireChoice {
    pub id: String,
    pub label: Localized,
}

impl WireQuestion {
    /// Translate a generated question into the remote schema
    ///
    /// `ordinal` is the 1-based question position, used for the
    /// deterministic fallback id `question{n}` when the id is absent.
    pub fn from_question(question: &Question, ordinal: usize) -> Self {
        let id = if question.id.is_empty() {
            format!("question{ordinal}")
        } else {
            question.id.clone()
        };
        let headline = Localized::new(&question.headline);
        let required = question.required;

        match &question.kind {
            QuestionKind::Rating { range, labels } => Self::Rating {
                id,
                headline,
                required,
                is_draft: false,
                logic: Vec::new(),
                scale: "number".to_string(),
                range: *range,
                labels: WireScaleLabels {
                    left: Localized::new(&labels.left),
                    right: Localized::new(&labels.right),
                    center: Localized::empty(),
                },
            },
            QuestionKind::MultipleChoice { choices } => Self::MultipleChoiceMulti {
                id,
                headline,
                required,
                is_draft: false,
                logic: Vec::new(),
                choices: choices
                    .iter()
                    .enumerate()
                    .map(|(i, label)| WireChoice {
                        id: format!("choice_{}", i + 1),
                        label: Localized::new(label),
                    })
                    .collect(),
                multi_select: false,
                shuffle_option: "none".to_string(),
            },
            QuestionKind::OpenText { placeholder } => Self::OpenText {
                id,
                headline,
                required,
                is_draft: false,
                logic: Vec::new(),
                placeholder: Localized::new(placeholder),
                long_answer: false,
                input_type: "text".to_string(),
            },
        }
    }
}

/// Welcome card, disabled for seeded surveys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeCard {
    pub enabled: bool,
    pub headline: Localized,
    pub html: Localized,
    pub time_to_finish: bool,
    pub show_response_count: bool,
}

impl Default for WelcomeCard {
    fn default() -> Self {
        Self {
            enabled: false,
            headline: Localized::empty(),
            html: Localized::empty(),
            time_to_finish: false,
            show_response_count: false,
        }
    }
}

/// Thank-you card with canned copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouCard {
    pub enabled: bool,
    pub headline: Localized,
    pub html: Localized,
    pub show_response_count: bool,
}

impl Default for ThankYouCard {
    fn default() -> Self {
        Self {
            enabled: true,
            headline: Localized::new("Thank you!"),
            html: Localized::new("Your response has been recorded."),
            show_response_count: false,
        }
    }
}

/// Create-survey request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    /// Target environment; omitted entirely in the no-environment candidate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub survey_type: String,
    pub questions: Vec<WireQuestion>,
    pub welcome_card: WelcomeCard,
    pub thank_you_card: ThankYouCard,
    pub display_option: String,
    pub recontact_days: u32,
    pub status: String,
}

impl CreateSurveyRequest {
    /// Full payload for a survey, with or without an environment id
    pub fn for_survey(survey: &Survey, environment_id: Option<&str>) -> Self {
        Self {
            environment_id: environment_id.map(str::to_string),
            name: survey.name.clone(),
            survey_type: "link".to_string(),
            questions: survey
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| WireQuestion::from_question(q, i + 1))
                .collect(),
            welcome_card: WelcomeCard::default(),
            thank_you_card: ThankYouCard::default(),
            display_option: "displayOnce".to_string(),
            recontact_days: 0,
            status: "inProgress".to_string(),
        }
    }

    /// Minimal last-resort payload: first question only, no environment id
    pub fn minimal(survey: &Survey) -> Self {
        let mut payload = Self::for_survey(survey, None);
        payload.questions.truncate(1);
        payload
    }
}

/// Submit-response request, primary shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    pub survey_id: String,
    pub responses: BTreeMap<String, AnswerValue>,
    pub finished: bool,
    pub ttc: u32,
    pub user_id: String,
}

/// Submit-response request, alternate shape tried after a rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltSubmitResponseRequest {
    pub data: BTreeMap<String, AnswerValue>,
    pub survey_id: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScaleLabels;
    use chrono::Utc;

    fn question(kind: QuestionKind) -> Question {
        Question {
            id: "q1".into(),
            headline: "How did you hear about us?".into(),
            required: false,
            kind,
        }
    }

    #[test]
    fn multiple_choice_is_renamed_on_the_wire() {
        let q = question(QuestionKind::MultipleChoice {
            choices: vec!["Social Media".into(), "Search Engine".into()],
        });
        let wire = WireQuestion::from_question(&q, 1);
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["type"], "multipleChoiceMulti");
        assert_eq!(value["multiSelect"], false);
        assert_eq!(value["shuffleOption"], "none");
        assert_eq!(value["choices"][0]["id"], "choice_1");
        assert_eq!(value["choices"][0]["label"]["default"], "Social Media");
        assert_eq!(value["choices"][1]["id"], "choice_2");
    }

    #[test]
    fn rating_carries_numeric_scale_and_labels() {
        let q = question(QuestionKind::Rating {
            range: 10,
            labels: ScaleLabels {
                left: "Not at all likely".into(),
                right: "Extremely likely".into(),
            },
        });
        let value = serde_json::to_value(WireQuestion::from_question(&q, 1)).unwrap();

        assert_eq!(value["type"], "rating");
        assert_eq!(value["scale"], "number");
        assert_eq!(value["range"], 10);
        assert_eq!(value["labels"]["center"]["default"], "");
        assert_eq!(value["isDraft"], false);
        assert_eq!(value["logic"], serde_json::json!([]));
    }

    #[test]
    fn blank_question_id_gets_deterministic_fallback() {
        let mut q = question(QuestionKind::OpenText {
            placeholder: "Your suggestions...".into(),
        });
        q.id = String::new();
        let value = serde_json::to_value(WireQuestion::from_question(&q, 4)).unwrap();
        assert_eq!(value["id"], "question4");
        assert_eq!(value["inputType"], "text");
        assert_eq!(value["longAnswer"], false);
    }

    #[test]
    fn environment_id_is_omitted_when_absent() {
        let survey = Survey {
            id: "survey_1".into(),
            name: "Website Usability Survey".into(),
            survey_type: "link".into(),
            questions: vec![question(QuestionKind::OpenText {
                placeholder: "".into(),
            })],
            status: "inProgress".into(),
            thank_you_card: crate::models::ThankYouNote {
                headline: "Thanks".into(),
                subheader: "".into(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let with = serde_json::to_value(CreateSurveyRequest::for_survey(&survey, Some("env_1")))
            .unwrap();
        assert_eq!(with["environmentId"], "env_1");
        assert_eq!(with["type"], "link");
        assert_eq!(with["displayOption"], "displayOnce");
        assert_eq!(with["status"], "inProgress");
        assert_eq!(with["welcomeCard"]["enabled"], false);
        assert_eq!(with["thankYouCard"]["enabled"], true);

        let without = serde_json::to_value(CreateSurveyRequest::for_survey(&survey, None)).unwrap();
        assert!(without.get("environmentId").is_none());
    }

    #[test]
    fn minimal_payload_keeps_one_question() {
        let survey = Survey {
            id: "survey_2".into(),
            name: "Product Feedback Survey".into(),
            survey_type: "link".into(),
            questions: vec![
                question(QuestionKind::OpenText {
                    placeholder: "".into(),
                }),
                question(QuestionKind::OpenText {
                    placeholder: "".into(),
                }),
            ],
            status: "inProgress".into(),
            thank_you_card: crate::models::ThankYouNote {
                headline: "Thanks".into(),
                subheader: "".into(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let minimal = CreateSurveyRequest::minimal(&survey);
        assert_eq!(minimal.questions.len(), 1);
        assert!(minimal.environment_id.is_none());
    }
}
