//! Error message constants returned to API clients.
//!
//! These literals are part of the API contract; clients match on them, so
//! they must not be reworded.

// Validation errors
pub const ERR_MISSING_FIELDS: &str = "Please provide name and bio for the user.";

// Not-found errors
pub const ERR_USER_NOT_FOUND: &str = "The user with the specified ID does not exist.";

// Storage errors, one per operation. The underlying driver error is logged
// server-side and never forwarded to the client.
pub const ERR_LIST_USERS: &str = "The users information could not be retrieved.";
pub const ERR_GET_USER: &str = "The user information could not be retrieved.";
pub const ERR_CREATE_USER: &str = "There was an error while saving the user to the database";
pub const ERR_UPDATE_USER: &str = "The user information could not be modified.";
pub const ERR_DELETE_USER: &str = "The user could not be removed";
