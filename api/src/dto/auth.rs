use serde::{Deserialize, Serialize};
use validator::Validate;

use sg_core::domain::value_objects::{self, Credentials, RegistrationDetails};

/// Body of `POST /api/v1/auth/register`
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    /// bcrypt only reads the first 72 bytes
    #[validate(length(min = 1, max = 72, message = "Password is required"))]
    pub password: String,
}

impl From<RegisterRequest> for RegistrationDetails {
    fn from(request: RegisterRequest) -> Self {
        RegistrationDetails::new(
            request.first_name,
            request.last_name,
            request.email,
            request.password,
        )
    }
}

/// Body of `POST /api/v1/auth/authenticate`
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<AuthenticationRequest> for Credentials {
    fn from(request: AuthenticationRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}

/// Successful registration or authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

impl From<value_objects::AuthResponse> for AuthResponse {
    fn from(response: value_objects::AuthResponse) -> Self {
        Self {
            token: response.token,
        }
    }
}
