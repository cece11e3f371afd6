//! Client error types

use thiserror::Error;

/// Client error type
///
/// Covers construction and configuration failures only. Rejections and
/// transport failures during seeding are recorded as attempt outcomes, not
/// surfaced through this type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required API key is missing
    #[error("FORMBRICKS_API_KEY environment variable is required")]
    MissingApiKey,

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
