//! Storage collaborators for the user resource.
//!
//! The service layer talks to storage through the [`UserStore`] trait so the
//! MongoDB-backed repository can be swapped for a test double.

mod user_repository;

#[cfg(test)]
mod memory;

use std::fmt;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::User;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use memory::{FailingUserStore, MemoryUserStore};

/// A failure inside the storage collaborator.
///
/// Wraps the driver error text for server-side logging; clients only ever
/// see the per-operation messages in `constants::errors`.
#[derive(Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::new(err.to_string())
    }
}

/// Persistence contract for the user resource.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return all users.
    async fn find(&self) -> Result<Vec<User>, StorageError>;

    /// Look up a single user by id.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StorageError>;

    /// Persist a new user and return its assigned id.
    async fn insert(&self, user: &User) -> Result<ObjectId, StorageError>;

    /// Replace the mutable fields of an existing user, returning the updated
    /// document, or `None` when no user has the given id.
    async fn update(&self, id: ObjectId, name: &str, bio: &str)
        -> Result<Option<User>, StorageError>;

    /// Delete a user by id, reporting whether a record existed.
    async fn remove(&self, id: ObjectId) -> Result<bool, StorageError>;
}
