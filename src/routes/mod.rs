use actix_web::web;
use log::warn;

use crate::constants::MSG_HELLO;
use crate::errors::ApiError;
use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Liveness probe, not part of the resource API
        .route("/", web::get().to(index))
        .service(
            web::scope("/users")
                .route("", web::get().to(handlers::get_users))
                .route("", web::post().to(handlers::create_user))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// JSON extractor configuration.
///
/// A body that cannot be read as JSON can never carry `name` and `bio`, so
/// malformed bodies get the same fixed 400 payload as a missing field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejecting unreadable JSON body: {}", err);
        ApiError::MissingFields.into()
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/",
    tag = "Liveness",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn index() -> &'static str {
    MSG_HELLO
}
