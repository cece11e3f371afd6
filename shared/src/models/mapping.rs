//! Local-id to remote-id survey mapping

use serde::{Deserialize, Serialize};

/// Record linking a survey's local generated id to the id assigned by the
/// remote system on a successful create call
///
/// The publisher emits exactly one entry per input survey, success or
/// failure, preserving input order. `position` is 1-based and serves as the
/// secondary lookup key when the generated id is absent or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Local generated id (`survey_{n}`), or a synthetic id after failure
    pub generated_id: String,
    /// 1-based ordinal position in the publish input
    pub position: usize,
    /// Remote-assigned id, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub name: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MappingEntry {
    pub fn created(generated_id: String, position: usize, remote_id: String, name: String) -> Self {
        Self {
            generated_id,
            position,
            remote_id: Some(remote_id),
            name,
            success: true,
            error: None,
        }
    }

    pub fn failed(generated_id: String, position: usize, name: String, error: String) -> Self {
        Self {
            generated_id,
            position,
            remote_id: None,
            name,
            success: false,
            error: Some(error),
        }
    }
}

/// Typed lookup key for the survey mapping table
///
/// Wraps the local survey id string and knows how to derive the positional
/// form (`survey_{n}`) and how to read a trailing numeric suffix back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyKey(String);

impl SurveyKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Key for an entry's 1-based position
    pub fn from_position(position: usize) -> Self {
        Self(format!("survey_{position}"))
    }

    /// Trailing numeric suffix of the id, if any (`survey_3` -> 3)
    pub fn position_hint(&self) -> Option<usize> {
        self.0.rsplit('_').next()?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SurveyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
