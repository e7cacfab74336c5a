//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::token::{TokenClass, TokenRecord};
use sg_core::errors::DomainError;
use sg_core::repositories::TokenRepository;

use super::{database_error, is_unique_violation};

const TOKEN_COLUMNS: &str = "id, token, token_class, user_id, expired, revoked, created_at";

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to TokenRecord
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<TokenRecord, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::Database {
            message: format!("Failed to get {}: {}", name, e),
        };
        let uuid = |value: String| {
            Uuid::parse_str(&value).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })
        };

        let class: String = row.try_get("token_class").map_err(|e| column("token_class", e))?;

        Ok(TokenRecord::from_parts(
            uuid(row.try_get("id").map_err(|e| column("id", e))?)?,
            row.try_get("token").map_err(|e| column("token", e))?,
            class
                .parse::<TokenClass>()
                .map_err(|message| DomainError::Database { message })?,
            uuid(row.try_get("user_id").map_err(|e| column("user_id", e))?)?,
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            row.try_get("expired").map_err(|e| column("expired", e))?,
            row.try_get("revoked").map_err(|e| column("revoked", e))?,
        ))
    }

    /// Set a flag column on one token; flags are never cleared
    async fn set_flag(&self, column: &str, token: &str) -> Result<bool, DomainError> {
        let query = format!("UPDATE tokens SET {} = TRUE WHERE token = ?", column);

        // MySQL reports matched-but-unchanged rows as 0 affected, so check existence
        sqlx::query(&query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("update token flag", e))?;

        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tokens WHERE token = ?)")
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("check token", e))?;

        Ok(exists != 0)
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, DomainError> {
        let query = r#"
            INSERT INTO tokens (
                id, token, token_class, user_id, expired, revoked, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.token)
            .bind(record.token_class.as_str())
            .bind(record.user_id.to_string())
            .bind(record.is_expired())
            .bind(record.is_revoked())
            .bind(record.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(record),
            Err(e) if is_unique_violation(&e) => Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            }),
            Err(e) => Err(database_error("save token", e)),
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<TokenRecord>, DomainError> {
        let query = format!("SELECT {} FROM tokens WHERE token = ? LIMIT 1", TOKEN_COLUMNS);

        let result = sqlx::query(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find token", e))?;

        result.as_ref().map(Self::row_to_record).transpose()
    }

    async fn find_active_by_user(&self, user_id: Uuid) -> Result<Vec<TokenRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM tokens WHERE user_id = ? AND expired = FALSE AND revoked = FALSE ORDER BY created_at",
            TOKEN_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("find active tokens", e))?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn revoke(&self, token: &str) -> Result<bool, DomainError> {
        self.set_flag("revoked", token).await
    }

    async fn expire(&self, token: &str) -> Result<bool, DomainError> {
        self.set_flag("expired", token).await
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE tokens SET revoked = TRUE WHERE user_id = ? AND expired = FALSE AND revoked = FALSE",
        )
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("revoke user tokens", e))?;

        Ok(result.rows_affected())
    }
}
