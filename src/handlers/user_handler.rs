//! User handlers for the CRUD operations.
//!
//! Each handler is a linear flow: validate, call storage once, map the
//! outcome to a response. Checks run in a fixed order: id checks first,
//! field-presence checks second, the storage call last. Every path ends in
//! exactly one response.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::MSG_USER_REMOVED;
use crate::errors::ApiError;
use crate::models::{RemovedResponse, UserPayload, UserResponse};
use crate::services::UserService;
use crate::validators::{parse_user_id, presence_errors_to_api_error};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 500, description = "Storage failure", body = crate::models::StorageErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    debug!("Listing users");
    let users = user_service.list_users().await?;

    info!("Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::NotFoundResponse),
        (status = 500, description = "Storage failure", body = crate::models::StorageErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let id = parse_user_id(&user_id)?;
    let user = user_service.get_user_by_id(id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::UserNotFound
    })?;

    info!("Successfully fetched user: {}", user_id);
    Ok(HttpResponse::Ok().json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing name or bio", body = crate::models::MissingFieldsResponse),
        (status = 500, description = "Storage failure", body = crate::models::StorageErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate().map_err(presence_errors_to_api_error)?;

    let (name, bio) = body.into_fields();
    let created = user_service.create_user(name, bio).await?;

    info!("Created user: {}", created.id);
    Ok(HttpResponse::Created().json(created))
}

/// Update an existing user
///
/// Both `name` and `bio` are required; there are no partial updates.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing name or bio", body = crate::models::MissingFieldsResponse),
        (status = 404, description = "User not found", body = crate::models::NotFoundResponse),
        (status = 500, description = "Storage failure", body = crate::models::StorageErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Updating user with id: {}", user_id);

    // Id check precedes the field checks, which precede the storage call.
    let id = parse_user_id(&user_id)?;

    let body = body.into_inner();
    body.validate().map_err(presence_errors_to_api_error)?;

    let (name, bio) = body.into_fields();
    let updated = user_service
        .update_user(id, &name, &bio)
        .await?
        .ok_or_else(|| {
            warn!("User not found for update with id: {}", user_id);
            ApiError::UserNotFound
        })?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed", body = RemovedResponse),
        (status = 404, description = "User not found", body = crate::models::NotFoundResponse),
        (status = 500, description = "Storage failure", body = crate::models::StorageErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Deleting user with id: {}", user_id);

    let id = parse_user_id(&user_id)?;
    if !user_service.delete_user(id).await? {
        warn!("User not found for delete with id: {}", user_id);
        return Err(ApiError::UserNotFound);
    }

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::Ok().json(RemovedResponse {
        message: MSG_USER_REMOVED.to_string(),
    }))
}
