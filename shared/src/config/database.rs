//! MySQL pool configuration

use super::ConfigError;

/// Environment variable holding the MySQL connection URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;
const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

/// Connection URL and pool sizing for the user and token store
#[derive(Clone)]
pub struct DatabaseConfig {
    /// `mysql://` connection URL; may embed credentials
    pub url: String,

    pub max_connections: u32,

    /// Seconds to wait when acquiring a connection
    pub connect_timeout: u64,

    /// Seconds before an idle connection is closed
    pub idle_timeout: u64,

    /// Seconds before any connection is recycled
    pub max_lifetime: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("max_lifetime", &self.max_lifetime)
            .finish()
    }
}

impl DatabaseConfig {
    /// Pool settings for `url` with default sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT_SECS,
            max_lifetime: DEFAULT_MAX_LIFETIME_SECS,
        }
    }

    /// Load from process environment variables
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `DATABASE_URL`             | **yes**  |         |
    /// | `DATABASE_MAX_CONNECTIONS` | no       | 10      |
    /// | `DATABASE_CONNECT_TIMEOUT` | no       | 30      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingVar {
                name: DATABASE_URL_VAR.to_string(),
            })?;

        let mut config = Self::new(url);
        if let Some(max) = optional(&lookup, "DATABASE_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        if let Some(timeout) = optional(&lookup, "DATABASE_CONNECT_TIMEOUT")? {
            config.connect_timeout = timeout;
        }
        Ok(config)
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
