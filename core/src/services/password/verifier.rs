//! Credential verification off the async executor

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};

use super::encoder::PasswordEncoder;

const TIMING_PLACEHOLDER: &str = "sessiongate-timing-placeholder";

/// Runs password hashing and checks on the blocking thread pool
///
/// Verifying against a missing account still performs a full hash
/// comparison, so unknown emails and wrong passwords take the same time.
pub struct CredentialVerifier<P: PasswordEncoder> {
    encoder: Arc<P>,
    placeholder_hash: Arc<str>,
}

impl<P: PasswordEncoder> Clone for CredentialVerifier<P> {
    fn clone(&self) -> Self {
        Self {
            encoder: self.encoder.clone(),
            placeholder_hash: self.placeholder_hash.clone(),
        }
    }
}

impl<P: PasswordEncoder> CredentialVerifier<P> {
    /// Wrap an encoder, computing the placeholder hash once
    pub fn new(encoder: P) -> DomainResult<Self> {
        let placeholder_hash = encoder.hash(TIMING_PLACEHOLDER)?;
        Ok(Self {
            encoder: Arc::new(encoder),
            placeholder_hash: Arc::from(placeholder_hash),
        })
    }

    /// Hash a new password
    pub async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let encoder = self.encoder.clone();
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || encoder.hash(&plaintext))
            .await
            .map_err(join_error)?
    }

    /// Check a password against the stored hash, if there is one
    ///
    /// Returns `false` when `stored_hash` is `None`, after doing the same
    /// amount of work as a real comparison.
    pub async fn verify(&self, plaintext: &str, stored_hash: Option<&str>) -> DomainResult<bool> {
        let encoder = self.encoder.clone();
        let plaintext = plaintext.to_owned();
        let (hash, known): (Arc<str>, bool) = match stored_hash {
            Some(hash) => (Arc::from(hash), true),
            None => (self.placeholder_hash.clone(), false),
        };

        let matched = tokio::task::spawn_blocking(move || encoder.matches(&plaintext, &hash))
            .await
            .map_err(join_error)?;

        Ok(known && matched)
    }
}

fn join_error(e: tokio::task::JoinError) -> DomainError {
    DomainError::Internal {
        message: format!("Password task failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::password::BcryptPasswordEncoder;

    fn verifier() -> CredentialVerifier<BcryptPasswordEncoder> {
        CredentialVerifier::new(BcryptPasswordEncoder::new(4)).unwrap()
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let verifier = verifier();
        let hash = verifier.hash("Secret123").await.unwrap();

        assert!(verifier.verify("Secret123", Some(&hash)).await.unwrap());
        assert!(!verifier.verify("wrong", Some(&hash)).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_hash_never_verifies() {
        let verifier = verifier();

        assert!(!verifier.verify("Secret123", None).await.unwrap());
        assert!(!verifier.verify(TIMING_PLACEHOLDER, None).await.unwrap());
    }
}
