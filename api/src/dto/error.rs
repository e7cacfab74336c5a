use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

pub use sg_shared::types::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// 400 response listing the messages for each rejected field
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(camel_case(field), serde_json::json!(messages));
    }

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(fields)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Field names as clients send them
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("email"), "email");
    }
}
