//! Application factory
//!
//! Builds the Actix-web application around an already wired [`AppState`].

use actix_web::{
    body::MessageBody, error::InternalError, http::StatusCode, middleware::Logger, web, App,
    HttpResponse,
};

use sg_core::repositories::{TokenRepository, UserRepository};
use sg_core::services::password::PasswordEncoder;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::routes::auth::{authenticate, register, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, T, P>(
    app_state: web::Data<AppState<U, T, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordEncoder,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, T, P>))
                    .route("/authenticate", web::post().to(authenticate::<U, T, P>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Unparseable bodies are reported as JSON like every other error
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        let response = ErrorResponse::new("invalid_request", "Request body is not valid JSON")
            .with_detail("reason", serde_json::json!(err.to_string()))
            .to_response(StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sessiongate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
