//! Authentication service module
//!
//! Registration and login. Both flows end by issuing an access token whose
//! subject is the account email.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
