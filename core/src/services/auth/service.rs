//! Main authentication service implementation

use std::sync::Arc;

use sg_shared::utils::validation::{is_valid_email, length_between, not_empty};

use crate::domain::entities::token::{TokenClass, TokenRecord};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, Credentials, RegistrationDetails};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::password::{CredentialVerifier, PasswordEncoder};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service coordinating registration and login
pub struct AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordEncoder,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token repository recording every issued token
    token_repository: Arc<T>,
    /// Password hashing on the blocking pool
    credential_verifier: CredentialVerifier<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, P> AuthService<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordEncoder,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        credential_verifier: CredentialVerifier<P>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            credential_verifier,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Register a new account and issue its first access token
    ///
    /// This method:
    /// 1. Validates names, email and password
    /// 2. Rejects an email that is already registered
    /// 3. Hashes the password and signs an access token for the new account
    /// 4. Stores the `USER`-role account, then records the token
    ///
    /// The existence check is only a fast path. The repository's atomic
    /// insert decides the outcome when two registrations race. Once the
    /// account is stored the token is returned even if recording it fails.
    ///
    /// # Errors
    /// * `AuthError::DuplicateEmail` - Email already registered
    /// * `ValidationError` - A field is blank, too long or malformed
    pub async fn register(&self, details: RegistrationDetails) -> DomainResult<AuthResponse> {
        let RegistrationDetails {
            first_name,
            last_name,
            email,
            password,
        } = details;
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        let email = email.trim().to_string();

        self.validate_name("firstName", &first_name)?;
        self.validate_name("lastName", &last_name)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.validate_password(&password)?;

        if self.user_repository.exists_by_email(&email).await? {
            tracing::info!(
                event = "registration_rejected",
                reason = "duplicate_email",
                "Registration rejected"
            );
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = self.credential_verifier.hash(&password).await?;
        let user = User::new(first_name, last_name, email, password_hash);
        let token = self.token_service.generate_access_token(&user)?;

        let user = self.user_repository.create(user).await?;

        if let Err(error) = self.record_access_token(&token, &user).await {
            tracing::error!(
                user_id = %user.id,
                error = %error,
                "Failed to record access token for new user"
            );
        }

        tracing::info!(
            user_id = %user.id,
            event = "user_registered",
            "Registered new user"
        );

        Ok(AuthResponse::new(token))
    }

    /// Verify credentials and issue a fresh access token
    ///
    /// # Errors
    /// * `AuthError::UserNotFound` - No account for the email
    /// * `AuthError::InvalidCredentials` - Password does not match
    ///
    /// Callers facing clients should not tell these two apart.
    pub async fn authenticate(&self, credentials: Credentials) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(credentials.email.trim())
            .await?;

        // Always pay for one hash comparison, account or not
        let matched = self
            .credential_verifier
            .verify(
                &credentials.password,
                user.as_ref().map(|u| u.password_hash.as_str()),
            )
            .await?;

        let user = match user {
            Some(user) => user,
            None => {
                tracing::warn!(
                    event = "login_failed",
                    reason = "user_not_found",
                    "Authentication failed"
                );
                return Err(AuthError::UserNotFound.into());
            }
        };

        if !matched {
            tracing::warn!(
                user_id = %user.id,
                event = "login_failed",
                reason = "invalid_password",
                "Authentication failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.generate_access_token(&user)?;
        self.record_access_token(&token, &user).await?;

        tracing::info!(
            user_id = %user.id,
            event = "login_succeeded",
            "User authenticated"
        );

        Ok(AuthResponse::new(token))
    }

    async fn record_access_token(&self, token: &str, user: &User) -> DomainResult<()> {
        self.token_repository
            .save(TokenRecord::new(token.to_string(), TokenClass::Access, user.id))
            .await?;
        Ok(())
    }

    fn validate_name(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        if !not_empty(value) {
            return Err(ValidationError::RequiredField {
                field: field.to_string(),
            });
        }
        if !length_between(value, 1, self.config.max_name_length) {
            return Err(ValidationError::InvalidLength {
                field: field.to_string(),
                min: 1,
                max: self.config.max_name_length,
            });
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            });
        }
        if password.chars().count() < self.config.min_password_length
            || password.len() > self.config.max_password_bytes
        {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
                max: self.config.max_password_bytes,
            });
        }
        Ok(())
    }
}
