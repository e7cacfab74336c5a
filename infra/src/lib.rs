//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for SessionGate, following
//! Clean Architecture principles. It provides the MySQL implementations of
//! the repository traits declared in `sg_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, schema migrations and repositories using SQLx

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlTokenRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
