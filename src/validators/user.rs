//! User-specific validation helpers.

use log::warn;
use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::errors::ApiError;

/// Parse a path id into an `ObjectId`.
///
/// An id that does not parse can never resolve to a stored user, so it is
/// reported as not-found rather than as a malformed request.
pub fn parse_user_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| {
        warn!("Rejecting unparseable user id: {}", id);
        ApiError::UserNotFound
    })
}

/// Convert payload presence failures into the fixed 400 response.
pub fn presence_errors_to_api_error(e: ValidationErrors) -> ApiError {
    warn!(
        "Payload failed presence validation on fields: {:?}",
        e.field_errors().keys()
    );
    ApiError::MissingFields
}
