pub mod auth;
pub mod error;

pub use auth::{AuthResponse, AuthenticationRequest, RegisterRequest};
pub use error::{validation_error_response, ErrorResponse, ErrorResponseExt};
