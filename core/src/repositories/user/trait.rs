//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the domain layer independent of the
//! storage technology. Implementations live in the infrastructure crate,
//! with an in-memory version in [`super::mock`] for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Email uniqueness is the store's responsibility: [`UserRepository::create`]
/// must check and insert atomically so that concurrent registrations with
/// the same email produce exactly one account.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use sg_core::repositories::UserRepository;
/// use sg_core::domain::entities::user::User;
/// use sg_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email
    ///
    /// Advisory only: a `false` here does not reserve the email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::DuplicateEmail))` - Email already taken
    /// * `Err(DomainError)` - Any other storage failure
    ///
    /// [`AuthError::DuplicateEmail`]: crate::errors::AuthError::DuplicateEmail
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
