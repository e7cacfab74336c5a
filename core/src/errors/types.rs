//! Error types for authentication, token handling and input validation
//!
//! Messages here are for logs and internal callers. The presentation layer
//! decides what a client actually sees.

use thiserror::Error;

/// Authentication-related errors
///
/// `UserNotFound` and `InvalidCredentials` stay distinct here so they can be
/// logged separately; clients receive the same response for both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
///
/// Expiry is deliberately absent: an expired but authentic token still
/// decodes, and validity is answered as a boolean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Reserved claim cannot be overridden: {claim}")]
    ReservedClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },
}
