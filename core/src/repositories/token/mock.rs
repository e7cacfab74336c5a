//! In-memory implementation of TokenRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::TokenRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository keyed by token string
#[derive(Clone)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, TokenRecord>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&record.token) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<TokenRecord>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn find_active_by_user(&self, user_id: Uuid) -> Result<Vec<TokenRecord>, DomainError> {
        let tokens = self.tokens.read().await;
        let mut active: Vec<TokenRecord> = tokens
            .values()
            .filter(|t| t.user_id == user_id && t.is_active())
            .cloned()
            .collect();
        active.sort_by_key(|t| t.created_at);
        Ok(active)
    }

    async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token) {
            Some(record) => {
                record.revoke();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn expire(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token) {
            Some(record) => {
                record.expire();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for record in tokens
            .values_mut()
            .filter(|t| t.user_id == user_id && t.is_active())
        {
            record.revoke();
            count += 1;
        }

        Ok(count)
    }
}
