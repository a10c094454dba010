//! Success message constants used throughout the application.

// Liveness probe body
pub const MSG_HELLO: &str = "hello node 22";

// User management messages
pub const MSG_USER_REMOVED: &str = "The user has been removed.";
