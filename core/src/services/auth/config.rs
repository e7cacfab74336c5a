//! Configuration for the authentication service

/// Input limits applied before any account work happens
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Longest accepted first or last name, in characters
    pub max_name_length: usize,
    /// Shortest accepted password, in characters
    pub min_password_length: usize,
    /// Longest accepted password in bytes; bcrypt ignores anything past 72
    pub max_password_bytes: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            min_password_length: 1,
            max_password_bytes: 72,
        }
    }
}
