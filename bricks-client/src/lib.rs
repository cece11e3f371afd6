//! Seeding client for the survey platform API
//!
//! Pushes locally generated surveys and responses into the platform's REST
//! API, degrading gracefully when endpoints reject requests or the platform
//! is unreachable. Non-2xx statuses and connection failures on the seeding
//! paths are ordinary outcomes, not errors: each operation walks an ordered
//! list of fallback candidates and records what happened.
//!
//! # Modules
//!
//! - [`config`]: environment-backed client configuration
//! - [`http`]: thin request layer with the static API-key header
//! - [`discovery`]: environment-id resolution
//! - [`publisher`]: survey creation with local-id to remote-id mapping
//! - [`submitter`]: response submission over the mapping
//! - [`retry`]: generic exponential-backoff helper

pub mod config;
pub mod discovery;
pub mod error;
pub mod http;
pub mod publisher;
pub mod retry;
pub mod submitter;

pub use config::ClientConfig;
pub use discovery::discover_environment;
pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, Attempt};
pub use publisher::{prepare_users, publish_surveys};
pub use retry::retry_with_backoff;
pub use submitter::submit_responses;

/// Management endpoint used for survey creation and discovery
pub const SURVEYS_ENDPOINT: &str = "api/v1/management/surveys";
