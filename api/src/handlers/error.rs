//! Translation of domain errors into HTTP responses
//!
//! Client-facing messages are fixed strings. Internal detail stays in the
//! logs, and an unknown email is indistinguishable from a wrong password.

use actix_web::{http::StatusCode, HttpResponse};
use sg_core::errors::{AuthError, DomainError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Status code and body for a domain error
pub fn error_response(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::Auth(AuthError::DuplicateEmail) => (
            StatusCode::CONFLICT,
            ErrorResponse::new("duplicate_email", "Email is already registered"),
        ),
        DomainError::Auth(AuthError::UserNotFound | AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("invalid_credentials", "Invalid email or password"),
        ),
        DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("invalid_token", "Token is invalid"),
        ),
        DomainError::ValidationErr(err) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("validation_error", err.to_string()),
        ),
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("validation_error", message.clone()),
        ),
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("not_found", "The requested resource was not found"),
        ),
        DomainError::Configuration { .. }
        | DomainError::Database { .. }
        | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("internal_error", "An internal error occurred"),
        ),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = error_response(&error);

    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    body.to_response(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::errors::{TokenError, ValidationError};

    #[test]
    fn test_duplicate_email_is_conflict() {
        let (status, body) = error_response(&AuthError::DuplicateEmail.into());

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.error, "duplicate_email");
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let (status_a, body_a) = error_response(&AuthError::UserNotFound.into());
        let (status_b, body_b) = error_response(&AuthError::InvalidCredentials.into());

        assert_eq!(status_a, StatusCode::UNAUTHORIZED);
        assert_eq!(status_a, status_b);
        assert_eq!(body_a.error, body_b.error);
        assert_eq!(body_a.message, body_b.message);
    }

    #[test]
    fn test_validation_and_token_errors() {
        let (status, _) = error_response(&ValidationError::InvalidEmail.into());
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(&TokenError::InvalidSignature.into());
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let (status, body) = error_response(&DomainError::Database {
            message: "connection refused at 10.0.0.5".to_string(),
        });

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.message.contains("10.0.0.5"));
    }
}
