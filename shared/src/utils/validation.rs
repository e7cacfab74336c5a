//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check: one `@`, non-empty local part, dotted domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Maximum accepted email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Check if a string is not blank
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length (in characters) is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann @example.com"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("Ann"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between_counts_chars() {
        assert!(length_between("Zoë", 1, 3));
        assert!(!length_between("", 1, 3));
        assert!(!length_between("abcd", 1, 3));
    }
}
