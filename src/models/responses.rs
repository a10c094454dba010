//! Response models returned to API clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's name
    #[schema(example = "Ada")]
    pub name: String,
    /// User's biography
    #[schema(example = "math")]
    pub bio: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            bio: user.bio,
            created_at: DateTime::from_timestamp_millis(user.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(user.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedResponse {
    /// Confirmation message
    #[schema(example = "The user has been removed.")]
    pub message: String,
}

/// Body returned when a request fails presence validation (400).
#[derive(Debug, Serialize, ToSchema)]
pub struct MissingFieldsResponse {
    /// Validation error message
    #[serde(rename = "errorMessage")]
    #[schema(example = "Please provide name and bio for the user.")]
    pub error_message: String,
}

/// Body returned when the referenced user does not exist (404).
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundResponse {
    /// Not-found message
    #[schema(example = "The user with the specified ID does not exist.")]
    pub message: String,
}

/// Body returned when the storage collaborator fails (500).
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageErrorResponse {
    /// Opaque storage failure message
    #[schema(example = "The users information could not be retrieved.")]
    pub error: String,
}
