//! Configuration for the token service

use chrono::Duration;
use sg_shared::JwtConfig;

/// Lifetimes applied to newly issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
}

impl TokenServiceConfig {
    pub fn new(access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            access_ttl,
            refresh_ttl,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_ttl: Duration::milliseconds(config.access_ttl_millis),
            refresh_ttl: Duration::milliseconds(config.refresh_ttl_millis),
        }
    }
}
