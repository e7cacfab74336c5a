//! # SessionGate Core
//!
//! Core business logic and domain layer for the SessionGate backend.
//! This crate contains domain entities, the token lifecycle engine, the
//! credential verifier, the registration/login orchestrator, repository
//! interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, ExtraClaims, Role, TokenClass, TokenRecord, User};
pub use domain::value_objects::{AuthResponse, Credentials, RegistrationDetails};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{MockTokenRepository, MockUserRepository, TokenRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, BcryptPasswordEncoder, CredentialVerifier, PasswordEncoder,
    SigningKey, SigningKeys, TokenService, TokenServiceConfig,
};
