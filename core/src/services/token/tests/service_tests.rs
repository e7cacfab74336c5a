//! Unit tests for token service

use chrono::{Duration, TimeZone, Utc};
use sg_shared::JwtConfig;

use crate::domain::entities::token::{ExtraClaims, TokenClass};
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

const ACCESS: &str = "YWNjZXNzLXNlY3JldC1mb3ItdGVzdHMtMzItYnl0ZXMhIQ==";
const REFRESH: &str = "cmVmcmVzaC1zZWNyZXQtZm9yLXRlc3RzLTMyLWJ5dGVzIQ==";

const ACCESS_TTL_MILLIS: i64 = 15 * 60 * 1_000;
const REFRESH_TTL_MILLIS: i64 = 7 * 24 * 60 * 60 * 1_000;

fn service() -> TokenService {
    let config = JwtConfig::new(ACCESS, ACCESS_TTL_MILLIS, REFRESH, REFRESH_TTL_MILLIS).unwrap();
    TokenService::from_config(&config).unwrap()
}

fn ann() -> User {
    User::new(
        "Ann".to_string(),
        "Lee".to_string(),
        "ann@example.com".to_string(),
        "$2b$04$hash".to_string(),
    )
}

#[test]
fn test_config_lifetimes_come_from_millis() {
    let service = service();

    assert_eq!(service.access_ttl(), Duration::minutes(15));
    assert_eq!(service.refresh_ttl(), Duration::days(7));
}

#[test]
fn test_from_config_rejects_short_secret() {
    let config = JwtConfig::new("c2hvcnQta2V5", ACCESS_TTL_MILLIS, REFRESH, REFRESH_TTL_MILLIS).unwrap();
    let err = TokenService::from_config(&config).unwrap_err();

    assert!(matches!(err, DomainError::Configuration { .. }));
}

#[test]
fn test_access_token_round_trips_subject_and_role() {
    let service = service();
    let token = service.generate_access_token(&ann()).unwrap();

    assert_eq!(service.extract_subject(&token).unwrap(), "ann@example.com");

    let claims = service.decode_access(&token).unwrap();
    assert_eq!(claims.role(), Some(Role::User.as_str()));
    assert_eq!(claims.ttl(), Duration::milliseconds(ACCESS_TTL_MILLIS));
    assert!(service.is_access_token_valid(&token, "ann@example.com"));
}

#[test]
fn test_access_token_with_custom_claims() {
    let service = service();
    let mut extra = ExtraClaims::new();
    extra.insert("tenant", "acme").unwrap();
    extra.insert("scopes", serde_json::json!(["read", "write"])).unwrap();

    let token = service
        .generate_access_token_with_claims("ann@example.com", extra)
        .unwrap();
    let claims = service.decode_access(&token).unwrap();

    assert_eq!(claims.extra.get_str("tenant"), Some("acme"));
    assert_eq!(
        claims.extra.get("scopes"),
        Some(&serde_json::json!(["read", "write"]))
    );
}

#[test]
fn test_refresh_token_uses_refresh_key_and_ttl() {
    let service = service();
    let token = service.generate_refresh_token(&ann()).unwrap();

    assert_eq!(service.extract_refresh_subject(&token).unwrap(), "ann@example.com");
    assert!(service.is_refresh_token_valid(&token, "ann@example.com"));

    let claims = service.decode_refresh(&token).unwrap();
    assert_eq!(claims.ttl(), Duration::milliseconds(REFRESH_TTL_MILLIS));
    assert!(claims.extra.is_empty());
}

#[test]
fn test_token_classes_are_not_interchangeable() {
    let service = service();
    let access = service.generate_access_token(&ann()).unwrap();
    let refresh = service.generate_refresh_token(&ann()).unwrap();

    assert!(!service.is_refresh_token_valid(&access, "ann@example.com"));
    assert!(!service.is_access_token_valid(&refresh, "ann@example.com"));
    assert!(matches!(
        service.extract_subject(&refresh),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_issue_at_fixed_instant_expires_after_ttl() {
    let service = TokenService::new(
        service().keys().clone(),
        TokenServiceConfig::new(Duration::seconds(30), Duration::hours(1)),
    );
    let issued_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

    let token = service
        .issue(TokenClass::Access, "ann@example.com", ExtraClaims::new(), issued_at)
        .unwrap();

    let valid_until = issued_at + Duration::seconds(30);
    assert!(service.is_valid_at(
        TokenClass::Access,
        &token,
        "ann@example.com",
        valid_until - Duration::seconds(1)
    ));
    assert!(!service.is_valid_at(TokenClass::Access, &token, "ann@example.com", valid_until));
}

#[test]
fn test_blank_subject_is_rejected() {
    let result = service().generate_access_token_with_claims(" ", ExtraClaims::new());

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidClaims))
    ));
}
