//! Survey publisher
//!
//! Translates generated surveys into the remote schema and creates them via
//! the management API, recording a local-id to remote-id mapping entry per
//! survey. Each survey walks an ordered list of candidate payloads and stops
//! at the first accepted one; rejections and transport failures both advance
//! the chain. One survey's total failure never stops the rest.

use crate::{ApiClient, SURVEYS_ENDPOINT};
use shared::models::{MappingEntry, PreparedUser, Survey, User};
use shared::wire::CreateSurveyRequest;

/// One fallback step in the publish chain
struct Candidate {
    label: &'static str,
    /// Whether this candidate is only meaningful with an environment id
    needs_environment: bool,
    build: fn(&Survey, Option<&str>) -> CreateSurveyRequest,
}

/// Ordered candidate payloads, evaluated with early exit on first acceptance
const CANDIDATES: &[Candidate] = &[
    Candidate {
        label: "full",
        needs_environment: true,
        build: |survey, environment| CreateSurveyRequest::for_survey(survey, environment),
    },
    Candidate {
        label: "no-environment",
        needs_environment: false,
        build: |survey, _| CreateSurveyRequest::for_survey(survey, None),
    },
    Candidate {
        label: "minimal",
        needs_environment: false,
        build: |survey, _| CreateSurveyRequest::minimal(survey),
    },
];

/// Create surveys via the remote API, in input order
///
/// Returns exactly one [`MappingEntry`] per input survey, success or
/// failure, preserving input order and 1-based position.
pub async fn publish_surveys(
    api: &ApiClient,
    environment_id: Option<&str>,
    surveys: &[Survey],
) -> Vec<MappingEntry> {
    let mut entries: Vec<MappingEntry> = Vec::with_capacity(surveys.len());

    for (idx, survey) in surveys.iter().enumerate() {
        let position = idx + 1;
        let generated_id = format!("survey_{position}");
        let mut created = None;
        let mut last_error = String::from("no candidate payload accepted");

        for candidate in CANDIDATES {
            if candidate.needs_environment && environment_id.is_none() {
                continue;
            }
            let payload = (candidate.build)(survey, environment_id);
            match api.post(SURVEYS_ENDPOINT, &payload).await {
                Ok(attempt) if attempt.is_accepted() => {
                    let remote_id = attempt
                        .remote_id()
                        .unwrap_or_else(|| format!("survey_{}", entries.len()));
                    tracing::info!(
                        "created survey '{}' ({} -> {})",
                        survey.name,
                        generated_id,
                        remote_id
                    );
                    created = Some(MappingEntry::created(
                        generated_id.clone(),
                        position,
                        remote_id,
                        survey.name.clone(),
                    ));
                    break;
                }
                Ok(attempt) => {
                    tracing::warn!(
                        candidate = candidate.label,
                        status = %attempt.status,
                        "survey creation rejected: {}",
                        attempt.error_preview()
                    );
                    last_error = format!("HTTP {}", attempt.status.as_u16());
                }
                Err(e) => {
                    tracing::warn!(candidate = candidate.label, "survey creation failed: {e}");
                    last_error = e.to_string();
                }
            }
        }

        entries.push(created.unwrap_or_else(|| {
            // Synthetic local id; position is preserved so response mapping
            // can still be attempted as "unmapped"
            MappingEntry::failed(
                format!("mock_survey_{}", entries.len()),
                position,
                survey.name.clone(),
                last_error,
            )
        }));
    }

    let successes = entries.iter().filter(|e| e.success).count();
    tracing::info!("created {successes}/{} surveys via API", surveys.len());
    for entry in entries.iter().filter(|e| e.success) {
        tracing::debug!(
            "mapping: {} -> {} ({})",
            entry.generated_id,
            entry.remote_id.as_deref().unwrap_or("-"),
            entry.name
        );
    }

    entries
}

/// Derive API-side identities for generated users
///
/// The remote platform has no user creation endpoint; users are represented
/// by a stable uuid-v5 of their email when attributing responses.
pub fn prepare_users(users: &[User]) -> Vec<PreparedUser> {
    tracing::info!(
        "preparing {} users (no direct user creation API exists)",
        users.len()
    );
    users
        .iter()
        .cloned()
        .map(PreparedUser::from_user)
        .collect()
}
