//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use sg_shared::JwtConfig;

use crate::domain::entities::token::{Claims, ExtraClaims, TokenClass};
use crate::domain::entities::user::User;
use crate::errors::DomainResult;

use super::codec;
use super::config::TokenServiceConfig;
use super::key::{SigningKey, SigningKeys};
use super::validator;

/// Issues, decodes and validates access and refresh tokens
///
/// Holds only immutable keys and lifetimes; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TokenService {
    keys: SigningKeys,
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(keys: SigningKeys, config: TokenServiceConfig) -> Self {
        Self { keys, config }
    }

    /// Derives keys and lifetimes from startup configuration
    ///
    /// # Errors
    /// `DomainError::Configuration` when either secret is unusable.
    pub fn from_config(config: &JwtConfig) -> DomainResult<Self> {
        let keys = SigningKeys::from_config(config)?;
        Ok(Self::new(keys, TokenServiceConfig::from(config)))
    }

    pub fn access_ttl(&self) -> Duration {
        self.config.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.config.refresh_ttl
    }

    pub fn keys(&self) -> &SigningKeys {
        &self.keys
    }

    /// Access token for a user, carrying the user's role as an extra claim
    pub fn generate_access_token(&self, user: &User) -> DomainResult<String> {
        let mut extra = ExtraClaims::new();
        extra.insert("role", user.role.as_str())?;
        self.generate_access_token_with_claims(user.subject(), extra)
    }

    /// Access token for an arbitrary subject and claim set
    pub fn generate_access_token_with_claims(
        &self,
        subject: &str,
        extra: ExtraClaims,
    ) -> DomainResult<String> {
        self.issue(TokenClass::Access, subject, extra, Utc::now())
    }

    /// Refresh token for a user; carries no extra claims
    pub fn generate_refresh_token(&self, user: &User) -> DomainResult<String> {
        self.issue(
            TokenClass::Refresh,
            user.subject(),
            ExtraClaims::new(),
            Utc::now(),
        )
    }

    /// Sign a token of the given class as of `issued_at`
    pub fn issue(
        &self,
        class: TokenClass,
        subject: &str,
        extra: ExtraClaims,
        issued_at: DateTime<Utc>,
    ) -> DomainResult<String> {
        let ttl = self.ttl_for(class);
        let token = codec::encode(subject, extra, issued_at, ttl, self.keys.for_class(class))?;

        tracing::debug!(
            token_class = %class,
            ttl_seconds = ttl.num_seconds(),
            "Issued token"
        );

        Ok(token)
    }

    /// Decode an access token; expired tokens still decode
    pub fn decode_access(&self, token: &str) -> DomainResult<Claims> {
        codec::decode(token, self.keys.access())
    }

    /// Decode a refresh token; expired tokens still decode
    pub fn decode_refresh(&self, token: &str) -> DomainResult<Claims> {
        codec::decode(token, self.keys.refresh())
    }

    /// Subject of an access token
    pub fn extract_subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.decode_access(token)?.sub)
    }

    /// Subject of a refresh token
    pub fn extract_refresh_subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.decode_refresh(token)?.sub)
    }

    pub fn is_access_token_valid(&self, token: &str, expected_subject: &str) -> bool {
        validator::is_valid(token, expected_subject, self.keys.access())
    }

    pub fn is_refresh_token_valid(&self, token: &str, expected_subject: &str) -> bool {
        validator::is_valid(token, expected_subject, self.keys.refresh())
    }

    /// Validity of a token of `class` at a fixed instant
    pub fn is_valid_at(
        &self,
        class: TokenClass,
        token: &str,
        expected_subject: &str,
        now: DateTime<Utc>,
    ) -> bool {
        validator::is_valid_at(token, expected_subject, self.key_for(class), now)
    }

    fn key_for(&self, class: TokenClass) -> &SigningKey {
        self.keys.for_class(class)
    }

    fn ttl_for(&self, class: TokenClass) -> Duration {
        match class {
            TokenClass::Access => self.config.access_ttl,
            TokenClass::Refresh => self.config.refresh_ttl,
        }
    }
}
