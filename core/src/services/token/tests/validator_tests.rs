//! Unit tests for token validity checks

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sg_shared::JwtConfig;

use crate::domain::entities::token::{ExtraClaims, TokenClass};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{
    decode, encode, is_valid, is_valid_at, SigningKey, SigningKeys, TokenService,
    TokenServiceConfig,
};

const ACCESS: &str = "YWNjZXNzLXNlY3JldC1mb3ItdGVzdHMtMzItYnl0ZXMhIQ==";
const REFRESH: &str = "cmVmcmVzaC1zZWNyZXQtZm9yLXRlc3RzLTMyLWJ5dGVzIQ==";

fn access_key() -> SigningKey {
    SigningKey::derive(ACCESS, TokenClass::Access).unwrap()
}

fn refresh_key() -> SigningKey {
    SigningKey::derive(REFRESH, TokenClass::Refresh).unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn token_at(issued_at: DateTime<Utc>, ttl: Duration) -> String {
    encode("ann@example.com", ExtraClaims::new(), issued_at, ttl, &access_key()).unwrap()
}

#[test]
fn test_fresh_token_is_valid_for_its_subject() {
    let token = encode(
        "ann@example.com",
        ExtraClaims::new(),
        Utc::now(),
        Duration::minutes(15),
        &access_key(),
    )
    .unwrap();

    assert!(is_valid(&token, "ann@example.com", &access_key()));
}

#[test]
fn test_subject_comparison_is_exact() {
    let token = token_at(t0(), Duration::minutes(15));
    let now = t0() + Duration::seconds(1);

    assert!(!is_valid_at(&token, "bob@example.com", &access_key(), now));
    assert!(!is_valid_at(&token, "ANN@example.com", &access_key(), now));
    assert!(!is_valid_at(&token, "", &access_key(), now));
}

#[test]
fn test_other_key_never_validates() {
    let token = token_at(t0(), Duration::minutes(15));
    let now = t0() + Duration::seconds(1);

    assert!(is_valid_at(&token, "ann@example.com", &access_key(), now));
    assert!(!is_valid_at(&token, "ann@example.com", &refresh_key(), now));
}

#[test]
fn test_expiry_boundary_is_invalid() {
    let token = token_at(t0(), Duration::seconds(10));
    let key = access_key();

    assert!(is_valid_at(&token, "ann@example.com", &key, t0()));
    assert!(is_valid_at(
        &token,
        "ann@example.com",
        &key,
        t0() + Duration::milliseconds(9_999)
    ));
    assert!(!is_valid_at(&token, "ann@example.com", &key, t0() + Duration::seconds(10)));
    assert!(!is_valid_at(&token, "ann@example.com", &key, t0() + Duration::days(1)));
}

#[test]
fn test_expired_token_still_decodes() {
    let token = token_at(t0(), Duration::seconds(10));

    assert!(!is_valid(&token, "ann@example.com", &access_key()));

    let claims = decode(&token, &access_key()).unwrap();
    assert_eq!(claims.sub, "ann@example.com");
    assert!(claims.is_expired());
}

#[test]
fn test_tampered_payload_is_rejected() {
    let token = token_at(t0(), Duration::minutes(15));
    let parts: Vec<&str> = token.split('.').collect();

    let forged_payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({
            "sub": "mallory@example.com",
            "iat": 1_700_000_000,
            "exp": 1_700_000_900
        })
        .to_string(),
    );
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert!(!is_valid_at(
        &forged,
        "mallory@example.com",
        &access_key(),
        t0() + Duration::seconds(1)
    ));
    assert!(matches!(
        decode(&forged, &access_key()),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_malformed_token_is_invalid() {
    for token in ["", "garbage", "a.b.c"] {
        assert!(!is_valid(token, "ann@example.com", &access_key()));
    }
}

#[test]
fn test_refresh_token_expires_at_refresh_ttl() {
    let config = JwtConfig::new(ACCESS, 900_000, REFRESH, 86_400_000).unwrap();
    let keys = SigningKeys::from_config(&config).unwrap();
    let service = TokenService::new(
        keys,
        TokenServiceConfig::new(Duration::minutes(15), Duration::hours(24)),
    );

    let token = service
        .issue(TokenClass::Refresh, "ann@example.com", ExtraClaims::new(), t0())
        .unwrap();
    let expiry = t0() + Duration::hours(24);

    assert_eq!(service.decode_refresh(&token).unwrap().exp, expiry.timestamp());
    assert!(service.is_valid_at(TokenClass::Refresh, &token, "ann@example.com", t0()));
    assert!(service.is_valid_at(
        TokenClass::Refresh,
        &token,
        "ann@example.com",
        expiry - Duration::seconds(1)
    ));
    assert!(!service.is_valid_at(TokenClass::Refresh, &token, "ann@example.com", expiry));
    assert!(!service.is_valid_at(
        TokenClass::Refresh,
        &token,
        "ann@example.com",
        expiry + Duration::seconds(1)
    ));

    // Outlives the access lifetime, but never under the access key
    let after_access_ttl = t0() + Duration::minutes(30);
    assert!(service.is_valid_at(
        TokenClass::Refresh,
        &token,
        "ann@example.com",
        after_access_ttl
    ));
    assert!(!service.is_valid_at(TokenClass::Access, &token, "ann@example.com", t0()));
    assert!(!service.is_access_token_valid(&token, "ann@example.com"));
}
