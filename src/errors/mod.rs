use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{ERR_MISSING_FIELDS, ERR_USER_NOT_FOUND};
use crate::models::{MissingFieldsResponse, NotFoundResponse, StorageErrorResponse};

/// Errors a handler can surface to the client.
///
/// Each variant owns its exact wire format: the status code and the JSON
/// body shape are part of the API contract. Storage carries the
/// operation-specific message attached by the service layer; the underlying
/// driver error never reaches the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    MissingFields,
    UserNotFound,
    Storage(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingFields => write!(f, "Bad Request: {}", ERR_MISSING_FIELDS),
            ApiError::UserNotFound => write!(f, "Not Found: {}", ERR_USER_NOT_FOUND),
            ApiError::Storage(message) => write!(f, "Internal Server Error: {}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingFields => {
                HttpResponse::BadRequest().json(MissingFieldsResponse {
                    error_message: ERR_MISSING_FIELDS.to_string(),
                })
            }
            ApiError::UserNotFound => HttpResponse::NotFound().json(NotFoundResponse {
                message: ERR_USER_NOT_FOUND.to_string(),
            }),
            ApiError::Storage(message) => {
                HttpResponse::InternalServerError().json(StorageErrorResponse {
                    error: message.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    use crate::constants::ERR_LIST_USERS;

    async fn body_json(error: ApiError) -> Value {
        let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn missing_fields_maps_to_400_literal() {
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(ApiError::MissingFields).await,
            json!({ "errorMessage": "Please provide name and bio for the user." })
        );
    }

    #[actix_web::test]
    async fn user_not_found_maps_to_404_literal() {
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(ApiError::UserNotFound).await,
            json!({ "message": "The user with the specified ID does not exist." })
        );
    }

    #[actix_web::test]
    async fn storage_maps_to_500_with_operation_message() {
        let error = ApiError::Storage(ERR_LIST_USERS);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(error).await,
            json!({ "error": "The users information could not be retrieved." })
        );
    }
}
