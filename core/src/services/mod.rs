//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use password::{BcryptPasswordEncoder, CredentialVerifier, PasswordEncoder};
pub use token::{SigningKey, SigningKeys, TokenService, TokenServiceConfig};
