//! Client configuration

use crate::{ClientError, ClientResult};

/// Default platform URL for a local instance
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client configuration for connecting to the survey platform
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Management API key, sent as the `x-api-key` header
    pub api_key: String,

    /// Explicit environment id, when known up front
    pub environment_id: Option<String>,

    /// Known-good environment id to fall back on before probing the API
    pub fallback_environment_id: Option<String>,

    /// Request timeout in seconds for mutation calls
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration with defaults
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            environment_id: None,
            fallback_environment_id: None,
            timeout: 30,
        }
    }

    /// Set the explicit environment id
    pub fn with_environment_id(mut self, id: impl Into<String>) -> Self {
        self.environment_id = Some(id.into());
        self
    }

    /// Set the fallback environment id
    pub fn with_fallback_environment_id(mut self, id: impl Into<String>) -> Self {
        self.fallback_environment_id = Some(id.into());
        self
    }

    /// Load configuration from the environment
    ///
    /// A missing API key is the single fatal configuration error; every
    /// other variable has a default or is optional.
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("FORMBRICKS_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("FORMBRICKS_API_KEY").map_err(|_| ClientError::MissingApiKey)?;

        Ok(Self {
            base_url,
            api_key,
            environment_id: std::env::var("FORMBRICKS_ENVIRONMENT_ID").ok(),
            fallback_environment_id: std::env::var("FORMBRICKS_FALLBACK_ENVIRONMENT_ID").ok(),
            timeout: 30,
        })
    }
}
