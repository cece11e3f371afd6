//! Seed run report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a seeding run, written as the results artifact
///
/// Emitted on every run, including the degraded path where the remote API is
/// entirely unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub api_available: bool,
    pub surveys_generated: usize,
    pub users_generated: usize,
    pub responses_generated: usize,
    pub surveys_created_via_api: usize,
    pub responses_submitted_via_api: usize,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SeedReport {
    /// Report for the degraded path: API unreachable, nothing seeded
    pub fn simulated(surveys: usize, users: usize, responses: usize) -> Self {
        Self {
            api_available: false,
            surveys_generated: surveys,
            users_generated: users,
            responses_generated: responses,
            surveys_created_via_api: 0,
            responses_submitted_via_api: 0,
            timestamp: Utc::now(),
            note: Some("API endpoints limited in this instance".to_string()),
        }
    }
}
