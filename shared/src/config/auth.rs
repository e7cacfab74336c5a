//! Token signing configuration

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::ConfigError;

/// Environment variable holding the base64 access-token secret
pub const ACCESS_SECRET_VAR: &str = "JWT_ACCESS_SECRET";
/// Environment variable holding the access-token lifetime in milliseconds
pub const ACCESS_TTL_VAR: &str = "JWT_ACCESS_TTL_MILLIS";
/// Environment variable holding the base64 refresh-token secret
pub const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_SECRET";
/// Environment variable holding the refresh-token lifetime in milliseconds
pub const REFRESH_TTL_VAR: &str = "JWT_REFRESH_TTL_MILLIS";

/// Smallest accepted lifetime. Token timestamps have second precision.
pub const MIN_TTL_MILLIS: i64 = 1_000;

/// Secrets and lifetimes for the two token classes
///
/// All four values are required; there are no defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// Base64-encoded HMAC secret for access tokens
    pub access_secret: String,

    /// Access token lifetime in milliseconds
    pub access_ttl_millis: i64,

    /// Base64-encoded HMAC secret for refresh tokens
    pub refresh_secret: String,

    /// Refresh token lifetime in milliseconds
    pub refresh_ttl_millis: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("access_ttl_millis", &self.access_ttl_millis)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_ttl_millis", &self.refresh_ttl_millis)
            .finish()
    }
}

impl JwtConfig {
    /// Build and validate a configuration from explicit values
    pub fn new(
        access_secret: impl Into<String>,
        access_ttl_millis: i64,
        refresh_secret: impl Into<String>,
        refresh_ttl_millis: i64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            access_secret: access_secret.into(),
            access_ttl_millis,
            refresh_secret: refresh_secret.into(),
            refresh_ttl_millis,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from process environment variables
    ///
    /// | Env Var                  | Required |
    /// |--------------------------|----------|
    /// | `JWT_ACCESS_SECRET`      | **yes**  |
    /// | `JWT_ACCESS_TTL_MILLIS`  | **yes**  |
    /// | `JWT_REFRESH_SECRET`     | **yes**  |
    /// | `JWT_REFRESH_TTL_MILLIS` | **yes**  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingVar {
                    name: name.to_string(),
                })
        };

        let parse_ttl = |name: &str| -> Result<i64, ConfigError> {
            required(name)?
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                })
        };

        Self::new(
            required(ACCESS_SECRET_VAR)?,
            parse_ttl(ACCESS_TTL_VAR)?,
            required(REFRESH_SECRET_VAR)?,
            parse_ttl(REFRESH_TTL_VAR)?,
        )
    }

    /// Check secrets decode as base64 and lifetimes are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_secret(ACCESS_SECRET_VAR, &self.access_secret)?;
        check_secret(REFRESH_SECRET_VAR, &self.refresh_secret)?;
        check_ttl(ACCESS_TTL_VAR, self.access_ttl_millis)?;
        check_ttl(REFRESH_TTL_VAR, self.refresh_ttl_millis)?;
        Ok(())
    }
}

fn check_secret(name: &str, secret: &str) -> Result<(), ConfigError> {
    let decoded = STANDARD
        .decode(secret)
        .map_err(|e| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("not valid base64: {}", e),
        })?;

    if decoded.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: "secret decodes to zero bytes".to_string(),
        });
    }

    Ok(())
}

fn check_ttl(name: &str, ttl_millis: i64) -> Result<(), ConfigError> {
    if ttl_millis < MIN_TTL_MILLIS {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("must be at least {} ms, got {}", MIN_TTL_MILLIS, ttl_millis),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const ACCESS: &str = "YWNjZXNzLXNlY3JldC1mb3ItdGVzdHMtMzItYnl0ZXMhIQ==";
    const REFRESH: &str = "cmVmcmVzaC1zZWNyZXQtZm9yLXRlc3RzLTMyLWJ5dGVzIQ==";

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete() -> HashMap<String, String> {
        vars(&[
            (ACCESS_SECRET_VAR, ACCESS),
            (ACCESS_TTL_VAR, "900000"),
            (REFRESH_SECRET_VAR, REFRESH),
            (REFRESH_TTL_VAR, "604800000"),
        ])
    }

    #[test]
    fn test_loads_complete_configuration() {
        let env = complete();
        let config = JwtConfig::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.access_secret, ACCESS);
        assert_eq!(config.access_ttl_millis, 900_000);
        assert_eq!(config.refresh_secret, REFRESH);
        assert_eq!(config.refresh_ttl_millis, 604_800_000);
    }

    #[test]
    fn test_each_value_is_required() {
        for name in [ACCESS_SECRET_VAR, ACCESS_TTL_VAR, REFRESH_SECRET_VAR, REFRESH_TTL_VAR] {
            let mut env = complete();
            env.remove(name);

            let err = JwtConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
            assert_eq!(
                err,
                ConfigError::MissingVar {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut env = complete();
        env.insert(REFRESH_SECRET_VAR.to_string(), "   ".to_string());

        let err = JwtConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { .. }));
    }

    #[test]
    fn test_rejects_non_base64_secret() {
        let mut env = complete();
        env.insert(ACCESS_SECRET_VAR.to_string(), "not base64 !!".to_string());

        let err = JwtConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == ACCESS_SECRET_VAR));
    }

    #[test]
    fn test_rejects_non_numeric_ttl() {
        let mut env = complete();
        env.insert(ACCESS_TTL_VAR.to_string(), "fifteen minutes".to_string());

        let err = JwtConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == ACCESS_TTL_VAR));
    }

    #[test]
    fn test_rejects_sub_second_ttl() {
        let result = JwtConfig::new(ACCESS, 999, REFRESH, 604_800_000);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = JwtConfig::new(ACCESS, 900_000, REFRESH, -1);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = JwtConfig::new(ACCESS, 900_000, REFRESH, 604_800_000).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains(ACCESS));
        assert!(!debug.contains(REFRESH));
        assert!(debug.contains("900000"));
    }
}
