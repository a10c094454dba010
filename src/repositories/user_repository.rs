//! User repository for all MongoDB operations related to users.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_USERS;
use crate::models::User;
use crate::repositories::{StorageError, UserStore};

/// MongoDB-backed [`UserStore`].
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find(&self) -> Result<Vec<User>, StorageError> {
        debug!("Repository: listing users");
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StorageError> {
        debug!("Repository: finding user by id: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, StorageError> {
        let result = self.collection.insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::new("insert did not return an ObjectId"))
    }

    async fn update(
        &self,
        id: ObjectId,
        name: &str,
        bio: &str,
    ) -> Result<Option<User>, StorageError> {
        debug!("Repository: updating user: {}", id);
        let update = doc! {
            "$set": {
                "name": name,
                "bio": bio,
                "updated_at": mongodb::bson::DateTime::now(),
            }
        };

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn remove(&self, id: ObjectId) -> Result<bool, StorageError> {
        debug!("Repository: deleting user: {}", id);
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
