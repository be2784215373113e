//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A validated email address.
///
/// Validation is intentionally shallow (non-empty, contains `@`); the
/// delivery provider is the authority on deliverability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates an email address, rejecting obviously malformed input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_address_accepts_valid_input() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn email_address_trims_whitespace() {
        let email = EmailAddress::new("  user@example.com  ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn email_address_rejects_empty_input() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("   ").is_err());
    }

    #[test]
    fn email_address_rejects_missing_at_symbol() {
        assert!(EmailAddress::new("not-an-email").is_err());
    }
}
