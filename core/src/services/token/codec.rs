//! Compact JWS encoding and decoding of [`Claims`]
//!
//! Decoding checks signature and structure only. Expiry is a validity
//! question answered by [`super::validator`], so an expired token that was
//! genuinely signed with the key still decodes.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation};
use serde_json::{Map, Value};

use crate::domain::entities::token::{Claims, ExtraClaims};
use crate::errors::{DomainResult, TokenError};

use super::key::SigningKey;

/// Sign `{sub, iat, exp, ..extra}` with HS256
///
/// `exp` is `issued_at + ttl`, both at second precision.
pub fn encode(
    subject: &str,
    extra: ExtraClaims,
    issued_at: DateTime<Utc>,
    ttl: Duration,
    key: &SigningKey,
) -> DomainResult<String> {
    let claims = Claims::new(subject, extra, issued_at, ttl)?;
    encode_claims(&claims, key)
}

/// Sign already-built claims
pub fn encode_claims(claims: &Claims, key: &SigningKey) -> DomainResult<String> {
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, key.encoding_key()).map_err(|e| {
        tracing::error!(
            error = %e,
            token_class = %key.class(),
            "Failed to sign token"
        );
        TokenError::TokenGenerationFailed.into()
    })
}

/// Verify the signature and parse the claims
///
/// # Errors
/// * `TokenError::InvalidSignature` - wrong key, tampered content or a
///   non-HS256 algorithm header
/// * `TokenError::Malformed` - not a parseable compact JWS
/// * `TokenError::InvalidClaims` - signed payload lacks a required claim or
///   holds one of the wrong type
pub fn decode(token: &str, key: &SigningKey) -> DomainResult<Claims> {
    // Parse loosely first so the required-claim check sees the raw payload
    let payload =
        jsonwebtoken::decode::<Map<String, Value>>(token, key.decoding_key(), &validation())
            .map_err(|e| map_decode_error(e.kind()))?
            .claims;

    serde_json::from_value(Value::Object(payload)).map_err(|e| {
        tracing::debug!(
            error = %e,
            token_class = %key.class(),
            "Signed token has unusable claims"
        );
        TokenError::InvalidClaims.into()
    })
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["sub", "exp"]);
    validation
}

fn map_decode_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
        _ => TokenError::Malformed,
    }
}
