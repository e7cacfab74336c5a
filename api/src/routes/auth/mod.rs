//! Authentication route handlers
//!
//! - Registration of new accounts
//! - Email/password authentication

pub mod authenticate;
pub mod register;

use std::sync::Arc;

use sg_core::repositories::{TokenRepository, UserRepository};
use sg_core::services::auth::AuthService;
use sg_core::services::password::PasswordEncoder;

pub use authenticate::authenticate;
pub use register::register;

/// Application state that holds shared services
pub struct AppState<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordEncoder,
{
    pub auth_service: Arc<AuthService<U, T, P>>,
}

impl<U, T, P> AppState<U, T, P>
where
    U: UserRepository,
    T: TokenRepository,
    P: PasswordEncoder,
{
    pub fn new(auth_service: Arc<AuthService<U, T, P>>) -> Self {
        Self { auth_service }
    }
}
