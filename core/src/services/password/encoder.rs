//! One-way password encoders

use crate::errors::{DomainError, DomainResult};

/// Salted one-way password hashing
pub trait PasswordEncoder: Send + Sync + 'static {
    /// Hash a plaintext password; every call uses a fresh salt
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// An unparseable hash is treated as a mismatch.
    fn matches(&self, plaintext: &str, hash: &str) -> bool;
}

/// bcrypt encoder with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordEncoder {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn matches(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }
}
