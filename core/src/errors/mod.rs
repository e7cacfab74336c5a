//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Bad or missing startup configuration. Never recoverable at runtime.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Whether this error must stop the process from starting
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Configuration { .. })
    }
}

impl From<sg_shared::ConfigError> for DomainError {
    fn from(err: sg_shared::ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_configuration_errors_are_fatal() {
        assert!(DomainError::Configuration {
            message: "bad secret".to_string()
        }
        .is_fatal());
        assert!(!DomainError::Auth(AuthError::InvalidCredentials).is_fatal());
        assert!(!DomainError::Token(TokenError::InvalidSignature).is_fatal());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DomainError = sg_shared::ConfigError::MissingVar {
            name: "JWT_ACCESS_SECRET".to_string(),
        }
        .into();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("JWT_ACCESS_SECRET"));
    }

    #[test]
    fn test_transparent_messages() {
        let err = DomainError::from(AuthError::DuplicateEmail);
        assert_eq!(err.to_string(), "Email already registered");

        let err = DomainError::from(TokenError::ReservedClaim {
            claim: "exp".to_string(),
        });
        assert_eq!(err.to_string(), "Reserved claim cannot be overridden: exp");
    }
}
