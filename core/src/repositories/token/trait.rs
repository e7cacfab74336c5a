//! Token repository trait defining the interface for issued-token records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::TokenRecord;
use crate::errors::DomainError;

/// Repository trait for TokenRecord persistence operations
///
/// Records are written when a token is issued. Their `expired` and `revoked`
/// flags only ever go from false to true; implementations must never clear
/// them.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a newly issued token
    ///
    /// # Returns
    /// * `Ok(TokenRecord)` - The stored record
    /// * `Err(DomainError)` - Save failed (e.g., the token string is already stored)
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError>;

    /// Find a record by its token string
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenRecord>, DomainError>;

    /// All records for a user that are neither expired nor revoked
    async fn find_active_by_user(&self, user_id: Uuid) -> Result<Vec<TokenRecord>, DomainError>;

    /// Mark a token revoked
    ///
    /// # Returns
    /// * `Ok(true)` - A record was found and is now revoked
    /// * `Ok(false)` - No record for this token
    async fn revoke(&self, token: &str) -> Result<bool, DomainError>;

    /// Mark a token expired; same return convention as [`TokenRepository::revoke`]
    async fn expire(&self, token: &str) -> Result<bool, DomainError>;

    /// Revoke every active token belonging to a user
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records that changed state
    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError>;
}
