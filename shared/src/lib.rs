//! Shared utilities and common types for SessionGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The structured error body returned to API clients
//! - Input validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use types::ErrorResponse;
pub use utils::validation;
