//! API error body shared by every endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a details map to the error response
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.into(), value);
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_without_details_omits_field() {
        let response = ErrorResponse::new("duplicate_email", "Email is already registered");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "duplicate_email");
        assert_eq!(json["message"], "Email is already registered");
        assert!(json.get("details").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new("validation_error", "Invalid request data")
            .with_detail("field", serde_json::json!("email"));

        let details = response.details.unwrap();
        assert_eq!(details["field"], "email");
    }
}
