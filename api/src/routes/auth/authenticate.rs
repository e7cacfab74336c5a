use actix_web::{web, HttpResponse};
use validator::Validate;

use sg_core::repositories::{TokenRepository, UserRepository};
use sg_core::services::password::PasswordEncoder;

use crate::dto::{validation_error_response, AuthResponse, AuthenticationRequest};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/auth/authenticate
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ann@example.com",
///     "password": "Secret123"
/// }
/// ```
///
/// # Response
///
/// * `200` - `{"token": "<access token>"}`
/// * `400` - Invalid request data
/// * `401` - Unknown email or wrong password, reported identically
pub async fn authenticate<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<AuthenticationRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordEncoder,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.authenticate(request.into_inner().into()).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
