//! MongoDB collection name constants.

pub const COLLECTION_USERS: &str = "users";
