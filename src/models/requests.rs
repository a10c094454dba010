//! Request payload models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or updating a user.
///
/// Both fields are required and must be non-empty. Create and update share
/// this shape; there are no partial updates. The fields are `Option` so that
/// an absent property fails presence validation instead of body
/// deserialization, keeping the 400 response body under our control.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// The user's name
    #[validate(required, length(min = 1))]
    #[schema(example = "Ada")]
    pub name: Option<String>,
    /// A short biography
    #[validate(required, length(min = 1))]
    #[schema(example = "math")]
    pub bio: Option<String>,
}

impl UserPayload {
    /// Consume the payload into its `(name, bio)` fields.
    ///
    /// Only meaningful after `validate()` has passed; absent fields collapse
    /// to empty strings, which validation never lets through.
    pub fn into_fields(self) -> (String, String) {
        (self.name.unwrap_or_default(), self.bio.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> UserPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_complete_payload() {
        let body = payload(r#"{"name": "Ada", "bio": "math"}"#);
        assert!(body.validate().is_ok());
        assert_eq!(body.into_fields(), ("Ada".to_string(), "math".to_string()));
    }

    #[test]
    fn rejects_missing_name() {
        assert!(payload(r#"{"bio": "math"}"#).validate().is_err());
    }

    #[test]
    fn rejects_missing_bio() {
        assert!(payload(r#"{"name": "Ada"}"#).validate().is_err());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(payload(r#"{"name": "", "bio": "math"}"#).validate().is_err());
        assert!(payload(r#"{"name": "Ada", "bio": ""}"#).validate().is_err());
        assert!(payload(r#"{}"#).validate().is_err());
    }
}
