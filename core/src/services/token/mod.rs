//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Deriving HMAC signing keys for the access and refresh classes
//! - Encoding and decoding signed claims
//! - Answering whether a token is valid for a subject at a given instant

mod codec;
mod config;
mod key;
mod service;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode, encode_claims};
pub use config::TokenServiceConfig;
pub use key::{SigningKey, SigningKeys, MIN_KEY_BYTES};
pub use service::TokenService;
pub use validator::{is_valid, is_valid_at};
