use utoipa::OpenApi;

use crate::models::{
    MissingFieldsResponse, NotFoundResponse, RemovedResponse, StorageErrorResponse, UserPayload,
    UserResponse,
};

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "A minimal REST API exposing CRUD operations over a users resource."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    tags(
        (name = "Liveness", description = "Liveness probe"),
        (name = "Users", description = "User CRUD operations")
    ),
    paths(
        crate::routes::index,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user
    ),
    components(
        schemas(
            UserPayload,
            UserResponse,
            RemovedResponse,
            MissingFieldsResponse,
            NotFoundResponse,
            StorageErrorResponse
        )
    )
)]
pub struct ApiDoc;
