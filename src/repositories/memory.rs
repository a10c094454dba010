//! In-memory [`UserStore`] doubles for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::User;
use crate::repositories::{StorageError, UserStore};

/// HashMap-backed store; behaves like the real repository minus persistence.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<ObjectId, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self) -> Result<Vec<User>, StorageError> {
        let users = self.users.lock().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StorageError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, StorageError> {
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn update(
        &self,
        id: ObjectId,
        name: &str,
        bio: &str,
    ) -> Result<Option<User>, StorageError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            user.name = name.to_string();
            user.bio = bio.to_string();
            user.updated_at = mongodb::bson::DateTime::now();
            user.clone()
        }))
    }

    async fn remove(&self, id: ObjectId) -> Result<bool, StorageError> {
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

/// Store whose every operation fails, for exercising the 500 paths.
#[derive(Default)]
pub struct FailingUserStore;

impl FailingUserStore {
    fn failure() -> StorageError {
        StorageError::new("simulated storage failure")
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find(&self) -> Result<Vec<User>, StorageError> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<User>, StorageError> {
        Err(Self::failure())
    }

    async fn insert(&self, _user: &User) -> Result<ObjectId, StorageError> {
        Err(Self::failure())
    }

    async fn update(
        &self,
        _id: ObjectId,
        _name: &str,
        _bio: &str,
    ) -> Result<Option<User>, StorageError> {
        Err(Self::failure())
    }

    async fn remove(&self, _id: ObjectId) -> Result<bool, StorageError> {
        Err(Self::failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn insert_then_find_round_trips() {
        let store = MemoryUserStore::default();
        let id = store
            .insert(&User::new("Ada".to_string(), "math".to_string()))
            .await
            .unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Ada");
    }

    #[actix_web::test]
    async fn update_missing_user_returns_none() {
        let store = MemoryUserStore::default();
        let updated = store.update(ObjectId::new(), "Ada", "math").await.unwrap();
        assert!(updated.is_none());
    }

    #[actix_web::test]
    async fn remove_reports_existence() {
        let store = MemoryUserStore::default();
        let id = store
            .insert(&User::new("Ada".to_string(), "math".to_string()))
            .await
            .unwrap();

        assert!(store.remove(id).await.unwrap());
        assert!(!store.remove(id).await.unwrap());
    }
}
