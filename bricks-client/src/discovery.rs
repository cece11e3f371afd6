//! Environment discovery
//!
//! Resolves the environment id required by the create-survey call. Single
//! attempt per run, no retries; a discovery failure is non-fatal and the
//! publisher proceeds with a degraded (absent) identifier.

use crate::{ApiClient, ClientConfig, SURVEYS_ENDPOINT};

/// Sentinel returned when the list call succeeds but carries no identifier
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Resolve the target environment id
///
/// Policy, in order:
/// 1. explicit configuration value
/// 2. configured fallback constant
/// 3. `environmentId` of the first object returned by the list-surveys call
/// 4. `"default"` when the list succeeds but no identifier is present
/// 5. `None` when the list call itself fails
pub async fn discover_environment(api: &ApiClient, config: &ClientConfig) -> Option<String> {
    if let Some(id) = &config.environment_id {
        tracing::info!("using configured environment id: {}", truncate(id));
        return Some(id.clone());
    }
    if let Some(id) = &config.fallback_environment_id {
        tracing::warn!("using fallback environment id: {}", truncate(id));
        return Some(id.clone());
    }

    match api.get(SURVEYS_ENDPOINT).await {
        Ok(attempt) if attempt.is_accepted() => {
            let discovered = attempt
                .body
                .get("data")
                .and_then(|d| d.as_array())
                .and_then(|items| items.first())
                .and_then(|first| first.get("environmentId"))
                .and_then(|id| id.as_str())
                .map(str::to_string);
            match discovered {
                Some(id) => {
                    tracing::info!("discovered environment id from existing surveys: {}", truncate(&id));
                    Some(id)
                }
                None => {
                    tracing::warn!("survey list carries no environment id, using sentinel");
                    Some(DEFAULT_ENVIRONMENT.to_string())
                }
            }
        }
        Ok(attempt) => {
            tracing::warn!(status = %attempt.status, "survey list rejected, environment id unresolved");
            None
        }
        Err(e) => {
            tracing::warn!("survey list failed: {e}");
            None
        }
    }
}

fn truncate(id: &str) -> &str {
    let end = id.char_indices().nth(20).map_or(id.len(), |(i, _)| i);
    &id[..end]
}
