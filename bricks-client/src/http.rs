//! HTTP layer for the survey platform API
//!
//! Thin wrapper over `reqwest` that authenticates with the static
//! `x-api-key` header and returns every response, 2xx or not, as an
//! [`Attempt`]. The fallback chains in the publisher and submitter decide
//! what a non-2xx result means; this layer never interprets it.

use crate::{ClientConfig, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Timeout for the cheap availability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a single request that reached the server
#[derive(Debug, Clone)]
pub struct Attempt {
    pub status: StatusCode,
    /// Parsed response body, `Null` when the body is not JSON
    pub body: serde_json::Value,
    text: String,
}

impl Attempt {
    /// Whether the server accepted the request (2xx)
    pub fn is_accepted(&self) -> bool {
        self.status.is_success()
    }

    /// Remote-assigned id from a create response (`data.id`)
    pub fn remote_id(&self) -> Option<String> {
        self.body
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string)
    }

    /// Truncated body text for progress output
    pub fn error_preview(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(200)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }
}

/// Authenticated client for the platform's REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn into_attempt(response: reqwest::Response) -> ClientResult<Attempt> {
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
        Ok(Attempt { status, body, text })
    }

    /// GET with the API-key header
    pub async fn get(&self, path: &str) -> ClientResult<Attempt> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        Self::into_attempt(response).await
    }

    /// POST a JSON body with the API-key header
    pub async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Attempt> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;
        Self::into_attempt(response).await
    }

    /// POST a JSON body without authentication (client-facing endpoints)
    pub async fn post_public<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Attempt> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.post(&url).json(body).send().await?;
        Self::into_attempt(response).await
    }

    /// Probe platform availability, single attempt
    ///
    /// Checks the base URL first, then the management surveys endpoint. A
    /// non-2xx on the API probe still counts as available; only a transport
    /// failure or a non-2xx root page reports the platform as down.
    pub async fn test_connection(&self) -> bool {
        let root = self
            .client
            .get(&self.base_url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        match root {
            Ok(response) if response.status().is_success() => {
                tracing::info!("platform is running at {}", self.base_url);
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "platform is not responding normally");
                return false;
            }
            Err(e) => {
                tracing::warn!("cannot connect to platform: {e}");
                return false;
            }
        }

        match self
            .client
            .get(format!("{}/{}", self.base_url, crate::SURVEYS_ENDPOINT))
            .header("x-api-key", &self.api_key)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!("surveys API endpoint is accessible");
            }
            Ok(response) => {
                // Proceed anyway; the seeding paths handle rejection per call
                tracing::warn!(status = %response.status(), "surveys API returned an error");
            }
            Err(e) => {
                tracing::warn!("surveys API probe failed: {e}");
            }
        }
        true
    }
}
