use actix_web::{web, HttpResponse};
use validator::Validate;

use sg_core::repositories::{TokenRepository, UserRepository};
use sg_core::services::password::PasswordEncoder;

use crate::dto::{validation_error_response, AuthResponse, RegisterRequest};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Ann",
///     "lastName": "Lee",
///     "email": "ann@example.com",
///     "password": "Secret123"
/// }
/// ```
///
/// # Response
///
/// * `200` - `{"token": "<access token>"}`
/// * `400` - Invalid request data
/// * `409` - Email already registered
pub async fn register<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordEncoder,
{
    if let Err(errors) = request.validate() {
        let fields: Vec<_> = errors.field_errors().into_keys().collect();
        tracing::debug!(fields = ?fields, "Registration request rejected");
        return validation_error_response(&errors);
    }

    match state.auth_service.register(request.into_inner().into()).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
