//! The user document as stored in MongoDB.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// `name` and `bio` are always non-empty once persisted; the handler layer
/// rejects payloads that would violate this before any storage call.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub bio: String,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

impl User {
    /// Build a new, not-yet-persisted user document. The id is assigned by
    /// the storage layer on insert.
    pub fn new(name: String, bio: String) -> Self {
        let now = mongodb::bson::DateTime::now();
        Self {
            id: None,
            name,
            bio,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_id() {
        let user = User::new("Ada".to_string(), "math".to_string());
        assert!(user.id.is_none());
        assert_eq!(user.name, "Ada");
        assert_eq!(user.bio, "math");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn serializes_id_under_mongo_key() {
        let mut user = User::new("Ada".to_string(), "math".to_string());
        user.id = Some(ObjectId::new());

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Ada");
    }
}
