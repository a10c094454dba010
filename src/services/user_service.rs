//! User service for CRUD operations over the user resource.
//!
//! Sits between the handlers and the storage collaborator: every storage
//! failure is logged here and translated into the operation-specific client
//! message, so handlers never see driver errors.

use std::sync::Arc;

use log::error;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::constants::{
    ERR_CREATE_USER, ERR_DELETE_USER, ERR_GET_USER, ERR_LIST_USERS, ERR_UPDATE_USER,
};
use crate::errors::ApiError;
use crate::models::{User, UserResponse};
use crate::repositories::{UserRepository, UserStore};

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            store: Arc::new(UserRepository::new(db)),
        }
    }

    /// Create a new UserService with an injected store (for dependency injection).
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.store.find().await.map_err(|e| {
            error!("Failed to list users: {}", e);
            ApiError::Storage(ERR_LIST_USERS)
        })?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_id(&self, id: ObjectId) -> Result<Option<UserResponse>, ApiError> {
        let user = self.store.find_by_id(id).await.map_err(|e| {
            error!("Failed to fetch user {}: {}", id, e);
            ApiError::Storage(ERR_GET_USER)
        })?;

        Ok(user.map(UserResponse::from))
    }

    pub async fn create_user(&self, name: String, bio: String) -> Result<UserResponse, ApiError> {
        let user = User::new(name, bio);
        let id = self.store.insert(&user).await.map_err(|e| {
            error!("Failed to save user: {}", e);
            ApiError::Storage(ERR_CREATE_USER)
        })?;

        Ok(User {
            id: Some(id),
            ..user
        }
        .into())
    }

    pub async fn update_user(
        &self,
        id: ObjectId,
        name: &str,
        bio: &str,
    ) -> Result<Option<UserResponse>, ApiError> {
        let user = self.store.update(id, name, bio).await.map_err(|e| {
            error!("Failed to update user {}: {}", id, e);
            ApiError::Storage(ERR_UPDATE_USER)
        })?;

        Ok(user.map(UserResponse::from))
    }

    /// Delete a user, reporting whether a record existed.
    pub async fn delete_user(&self, id: ObjectId) -> Result<bool, ApiError> {
        self.store.remove(id).await.map_err(|e| {
            error!("Failed to delete user {}: {}", id, e);
            ApiError::Storage(ERR_DELETE_USER)
        })
    }
}
