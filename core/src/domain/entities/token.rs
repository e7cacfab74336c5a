//! Token entities for JWT-based session credentials.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::TokenError;

/// Registered claim names that extra claims may not shadow
pub const RESERVED_CLAIMS: [&str; 4] = ["sub", "iat", "exp", "jti"];

/// The two independently keyed token classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Short-lived token presented on every protected request
    Access,
    /// Long-lived token used to obtain new access tokens
    Refresh,
}

impl TokenClass {
    /// Storage / log representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Access => "access",
            TokenClass::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TokenClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenClass::Access),
            "refresh" => Ok(TokenClass::Refresh),
            other => Err(format!("Unknown token class: {}", other)),
        }
    }
}

/// Additional string-keyed claims merged into the token payload
///
/// Keys are validated on insert: the registered names in [`RESERVED_CLAIMS`]
/// belong to [`Claims`] itself and are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraClaims(Map<String, Value>);

impl ExtraClaims {
    /// Creates an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a claim, returning the previous value for the key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, TokenError> {
        let key = key.into();
        if RESERVED_CLAIMS.contains(&key.as_str()) {
            return Err(TokenError::ReservedClaim { claim: key });
        }
        Ok(self.0.insert(key, value.into()))
    }

    /// Looks up a claim
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a claim holding a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl TryFrom<Map<String, Value>> for ExtraClaims {
    type Error = TokenError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut claims = ExtraClaims::new();
        for (key, value) in map {
            claims.insert(key, value)?;
        }
        Ok(claims)
    }
}

/// Claims structure for JWT payload
///
/// `iat` and `exp` are NumericDate values (whole seconds since the epoch).
/// `jti` is a random UUID, so two tokens issued in the same second differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,

    /// Any further claims, flattened into the payload
    #[serde(flatten)]
    pub extra: ExtraClaims,
}

impl Claims {
    /// Builds claims expiring `ttl` after `issued_at`
    ///
    /// Both instants are truncated to whole seconds. Fails when the subject is
    /// blank or the lifetime does not leave `exp` strictly after `iat`.
    pub fn new(
        subject: &str,
        extra: ExtraClaims,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::InvalidClaims);
        }

        let iat = issued_at.timestamp();
        let exp = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenError::InvalidClaims)?
            .timestamp();

        if exp <= iat {
            return Err(TokenError::InvalidClaims);
        }

        Ok(Self {
            sub: subject.to_string(),
            iat,
            exp,
            jti: Uuid::new_v4().to_string(),
            extra,
        })
    }

    /// Issue instant
    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Expiry instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Lifetime the token was issued with
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Checks expiry against `now`; valid time is the half-open `[iat, exp)`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks expiry against the current time
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Role claim, when present
    pub fn role(&self) -> Option<&str> {
        self.extra.get_str("role")
    }
}

/// Persisted record of an issued token
///
/// `expired` and `revoked` only ever move from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// The signed token string, unique across records
    pub token: String,

    /// Which key class signed the token
    pub token_class: TokenClass,

    /// Owning user
    pub user_id: Uuid,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    expired: bool,

    revoked: bool,
}

impl TokenRecord {
    /// Creates an active record for a freshly issued token
    pub fn new(token: String, token_class: TokenClass, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            token,
            token_class,
            user_id,
            created_at: Utc::now(),
            expired: false,
            revoked: false,
        }
    }

    /// Rebuilds a record loaded from storage
    pub fn from_parts(
        id: Uuid,
        token: String,
        token_class: TokenClass,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        expired: bool,
        revoked: bool,
    ) -> Self {
        Self {
            id,
            token,
            token_class,
            user_id,
            created_at,
            expired,
            revoked,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked
    }

    /// Neither expired nor revoked
    pub fn is_active(&self) -> bool {
        !self.expired && !self.revoked
    }

    /// Marks the token expired
    pub fn expire(&mut self) {
        self.expired = true;
    }

    /// Marks the token revoked
    pub fn revoke(&mut self) {
        self.revoked = true;
    }
}
