//! MySQL implementation of the UserRepository trait.
//!
//! Email uniqueness is enforced by the `uk_users_email` index; a duplicate
//! insert surfaces as `AuthError::DuplicateEmail`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::user::{Role, User};
use sg_core::errors::{AuthError, DomainError};
use sg_core::repositories::UserRepository;

use super::{database_error, is_unique_violation};

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, role, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::Database {
            message: format!("Failed to get {}: {}", name, e),
        };

        let id: String = row.try_get("id").map_err(|e| column("id", e))?;
        let role: String = row.try_get("role").map_err(|e| column("role", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            first_name: row.try_get("first_name").map_err(|e| column("first_name", e))?,
            last_name: row.try_get("last_name").map_err(|e| column("last_name", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            role: role
                .parse::<Role>()
                .map_err(|message| DomainError::Database { message })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find user by email", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find user by id", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("check user email", e))?;

        Ok(exists != 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, last_name, email, password_hash,
                role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        // Single insert; the unique index arbitrates concurrent registrations
        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(AuthError::DuplicateEmail.into()),
            Err(e) => Err(database_error("create user", e)),
        }
    }
}
