//! HMAC signing keys derived from base64 configuration secrets

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{DecodingKey, EncodingKey};
use sg_shared::JwtConfig;

use crate::domain::entities::token::TokenClass;
use crate::errors::{DomainError, DomainResult};

/// HS256 needs at least 256 bits of key material
pub const MIN_KEY_BYTES: usize = 32;

/// Immutable signing key for one token class
///
/// Cloning shares nothing mutable, so a key can be handed to every worker.
#[derive(Clone)]
pub struct SigningKey {
    class: TokenClass,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("class", &self.class)
            .field("material", &"<redacted>")
            .finish()
    }
}

impl SigningKey {
    /// Derive a key from a standard-alphabet base64 secret
    ///
    /// Any failure here is a configuration error and should stop startup.
    pub fn derive(secret_base64: &str, class: TokenClass) -> DomainResult<Self> {
        let material = decode_secret(secret_base64, class)?;
        Ok(Self::from_material(&material, class))
    }

    fn from_material(material: &[u8], class: TokenClass) -> Self {
        Self {
            class,
            encoding: EncodingKey::from_secret(material),
            decoding: DecodingKey::from_secret(material),
        }
    }

    /// Token class this key signs
    pub fn class(&self) -> TokenClass {
        self.class
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

fn decode_secret(secret_base64: &str, class: TokenClass) -> DomainResult<Vec<u8>> {
    let material = STANDARD
        .decode(secret_base64.trim())
        .map_err(|e| DomainError::Configuration {
            message: format!("{} token secret is not valid base64: {}", class, e),
        })?;

    if material.is_empty() {
        return Err(DomainError::Configuration {
            message: format!("{} token secret is empty", class),
        });
    }

    if material.len() < MIN_KEY_BYTES {
        return Err(DomainError::Configuration {
            message: format!(
                "{} token secret must decode to at least {} bytes, got {}",
                class,
                MIN_KEY_BYTES,
                material.len()
            ),
        });
    }

    Ok(material)
}

/// The access and refresh keys, derived once at startup
#[derive(Debug, Clone)]
pub struct SigningKeys {
    access: SigningKey,
    refresh: SigningKey,
}

impl SigningKeys {
    /// Derive both keys from configuration
    ///
    /// The two classes must not share key material, otherwise a refresh
    /// token would verify as an access token.
    pub fn from_config(config: &JwtConfig) -> DomainResult<Self> {
        let access = decode_secret(&config.access_secret, TokenClass::Access)?;
        let refresh = decode_secret(&config.refresh_secret, TokenClass::Refresh)?;

        if access == refresh {
            return Err(DomainError::Configuration {
                message: "access and refresh token secrets must differ".to_string(),
            });
        }

        Ok(Self {
            access: SigningKey::from_material(&access, TokenClass::Access),
            refresh: SigningKey::from_material(&refresh, TokenClass::Refresh),
        })
    }

    pub fn access(&self) -> &SigningKey {
        &self.access
    }

    pub fn refresh(&self) -> &SigningKey {
        &self.refresh
    }

    /// Key for the given class
    pub fn for_class(&self, class: TokenClass) -> &SigningKey {
        match class {
            TokenClass::Access => &self.access,
            TokenClass::Refresh => &self.refresh,
        }
    }
}
