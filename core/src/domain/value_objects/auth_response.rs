//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

/// Payload returned by a successful registration or authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed access token
    pub token: String,
}

impl AuthResponse {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_token_object() {
        let response = AuthResponse::new("a.b.c".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"token": "a.b.c"}));
    }
}
