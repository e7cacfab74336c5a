//! Password hashing and verification
//!
//! [`PasswordEncoder`] is the synchronous hashing seam. [`CredentialVerifier`]
//! moves that CPU-heavy work onto tokio's blocking pool so request workers
//! stay responsive.

mod encoder;
mod verifier;

pub use encoder::{BcryptPasswordEncoder, PasswordEncoder};
pub use verifier::CredentialVerifier;
