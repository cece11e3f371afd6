//! User model
//!
//! Users exist only to attribute responses. The remote system has no
//! create-user endpoint, so they are never sent anywhere directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated user entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stable identity key for response attribution
    pub email: String,
    pub role: UserRole,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// User role within the generated organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Manager,
}

/// User with a derived remote-side identity
///
/// The remote API has no user creation call; a deterministic uuid-v5 of the
/// email stands in as the API-side identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedUser {
    #[serde(flatten)]
    pub user: User,
    pub api_user_id: Uuid,
}

impl PreparedUser {
    pub fn from_user(user: User) -> Self {
        let api_user_id = Uuid::new_v5(&Uuid::NAMESPACE_DNS, user.email.as_bytes());
        Self { user, api_user_id }
    }
}
