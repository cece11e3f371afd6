//! Response submitter
//!
//! Maps generated responses to their remote survey ids through the mapping
//! table and submits each one, trying every known endpoint and payload shape
//! until one is accepted. An unresolved or fully rejected response is
//! recorded as unsubmitted, never dropped and never an abort.

use crate::ApiClient;
use shared::models::{MappingEntry, SubmissionOutcome, SurveyKey, SurveyResponse};
use shared::wire::{AltSubmitResponseRequest, SubmitResponseRequest};
use std::collections::HashMap;
use uuid::Uuid;

/// Known response endpoints, tried in order
const RESPONSE_ENDPOINTS: &[&str] = &["api/v1/client/responses", "api/v1/responses"];

/// Submit responses through the survey mapping
///
/// When zero surveys were successfully published, the API is not touched at
/// all and every response comes back unsubmitted. This is the explicit
/// degraded path for an unavailable API.
pub async fn submit_responses(
    api: &ApiClient,
    responses: &[SurveyResponse],
    entries: &[MappingEntry],
) -> Vec<SubmissionOutcome> {
    let published: Vec<&MappingEntry> = entries.iter().filter(|e| e.success).collect();
    if published.is_empty() {
        tracing::warn!("no surveys created via API, recording all responses as unsubmitted");
        return responses
            .iter()
            .cloned()
            .map(SubmissionOutcome::unsubmitted)
            .collect();
    }

    let lookup = build_lookup(&published);
    tracing::info!(
        "found {} published surveys for response submission",
        published.len()
    );

    let mut outcomes = Vec::with_capacity(responses.len());
    let mut submitted_count = 0usize;

    for response in responses {
        let Some(entry) = resolve(&lookup, &published, &response.survey_id) else {
            tracing::debug!(
                "could not map {} to a published survey, skipping",
                response.survey_id
            );
            outcomes.push(SubmissionOutcome::unsubmitted(response.clone()));
            continue;
        };
        let Some(remote_id) = entry.remote_id.clone() else {
            tracing::warn!("no remote id recorded for survey '{}'", entry.name);
            outcomes.push(SubmissionOutcome::unsubmitted(response.clone()));
            continue;
        };

        match try_submit(api, response, &remote_id).await {
            Some(endpoint_used) => {
                tracing::info!(
                    "submitted response to '{}' (from {})",
                    entry.name,
                    response.survey_id
                );
                submitted_count += 1;
                outcomes.push(SubmissionOutcome::submitted(
                    response.clone(),
                    remote_id,
                    endpoint_used,
                    response.survey_id.clone(),
                ));
            }
            None => {
                tracing::warn!("could not submit response to '{}'", entry.name);
                outcomes.push(SubmissionOutcome::unsubmitted(response.clone()));
            }
        }
    }

    tracing::info!(
        "submitted {submitted_count}/{} responses via API",
        responses.len()
    );
    outcomes
}

/// Try every endpoint, primary shape first and alternate shape second,
/// accepting the first 2xx. Returns the accepting endpoint label.
async fn try_submit(api: &ApiClient, response: &SurveyResponse, remote_id: &str) -> Option<String> {
    let user_id = response
        .user_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let primary = SubmitResponseRequest {
        survey_id: remote_id.to_string(),
        responses: response.data.clone(),
        finished: true,
        ttc: response.ttc,
        user_id: user_id.clone(),
    };
    let alternate = AltSubmitResponseRequest {
        data: response.data.clone(),
        survey_id: remote_id.to_string(),
        user_id,
    };

    for endpoint in RESPONSE_ENDPOINTS {
        match api.post_public(endpoint, &primary).await {
            Ok(attempt) if attempt.is_accepted() => return Some((*endpoint).to_string()),
            Ok(attempt) => {
                tracing::debug!(endpoint, status = %attempt.status, "primary shape rejected");
            }
            Err(e) => {
                tracing::debug!(endpoint, "endpoint error: {e}");
                // Transport failure: the alternate shape would hit the same
                // wall, move on to the next endpoint
                continue;
            }
        }

        match api.post_public(endpoint, &alternate).await {
            Ok(attempt) if attempt.is_accepted() => {
                return Some(format!("{endpoint} (alt format)"));
            }
            Ok(attempt) => {
                tracing::debug!(endpoint, status = %attempt.status, "alternate shape rejected");
            }
            Err(e) => {
                tracing::debug!(endpoint, "endpoint error: {e}");
            }
        }
    }
    None
}

/// Lookup table over successful entries, keyed by generated id and by the
/// positional form `survey_{position}`
fn build_lookup<'a>(published: &[&'a MappingEntry]) -> HashMap<SurveyKey, &'a MappingEntry> {
    let mut lookup = HashMap::new();
    for entry in published {
        lookup.insert(SurveyKey::new(entry.generated_id.clone()), *entry);
        lookup.insert(SurveyKey::from_position(entry.position), *entry);
    }
    lookup
}

/// Resolve a response's survey reference: exact key first, then the
/// trailing-numeric-suffix position fallback
fn resolve<'a>(
    lookup: &HashMap<SurveyKey, &'a MappingEntry>,
    published: &[&'a MappingEntry],
    survey_id: &str,
) -> Option<&'a MappingEntry> {
    let key = SurveyKey::new(survey_id);
    if let Some(&entry) = lookup.get(&key) {
        return Some(entry);
    }
    let position = key.position_hint()?;
    published
        .iter()
        .find(|entry| entry.position == position)
        .copied()
}
