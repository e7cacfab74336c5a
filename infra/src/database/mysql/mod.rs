//! MySQL repository implementations

mod token_repository_impl;
mod user_repository_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use sg_core::errors::DomainError;

/// Wrap a driver error with the operation that failed
pub(crate) fn database_error(operation: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(operation = operation, error = %e, "Database operation failed");
    DomainError::Database {
        message: format!("{}: {}", operation, e),
    }
}

/// Whether the driver reported a UNIQUE constraint violation
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
