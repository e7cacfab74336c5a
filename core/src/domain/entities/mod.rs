//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{Claims, ExtraClaims, TokenClass, TokenRecord, RESERVED_CLAIMS};
pub use user::{Role, User};
