//! Boolean validity checks for presented tokens

use chrono::{DateTime, Utc};

use super::codec::decode;
use super::key::SigningKey;

/// Whether `token` is currently valid for `expected_subject`
pub fn is_valid(token: &str, expected_subject: &str, key: &SigningKey) -> bool {
    is_valid_at(token, expected_subject, key, Utc::now())
}

/// Whether `token` is valid for `expected_subject` at `now`
///
/// True only when the token decodes under `key`, its subject equals
/// `expected_subject` exactly, and `now` falls before `exp`. A token is
/// already invalid at the instant it expires.
pub fn is_valid_at(
    token: &str,
    expected_subject: &str,
    key: &SigningKey,
    now: DateTime<Utc>,
) -> bool {
    let claims = match decode(token, key) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(
                error = %e,
                token_class = %key.class(),
                "Token failed verification"
            );
            return false;
        }
    };

    if claims.sub != expected_subject {
        tracing::debug!(token_class = %key.class(), "Token subject mismatch");
        return false;
    }

    !claims.is_expired_at(now)
}
