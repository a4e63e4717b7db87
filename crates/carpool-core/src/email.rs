//! Member identity.
//!
//! Emails identify members everywhere in carpool. Lookups are
//! case-insensitive, so the address is folded to lowercase at
//! construction and every comparison downstream is exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A member email address, normalized to lowercase.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Normalize and wrap an address.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Invalid`] if the input is empty or has no `@`.
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(EmailError::Invalid {
                input: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// Errors that can occur when parsing an email address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    /// The input is not a plausible email address.
    #[error("invalid email address: {input:?}")]
    Invalid {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased() {
        let email = Email::new("Alice@Example.COM").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn email_is_trimmed() {
        let email = Email::new("  a@x.com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn email_without_at_rejected() {
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("").is_err());
    }

    #[test]
    fn mixed_case_emails_compare_equal() {
        let a = Email::new("A@X.com").unwrap();
        let b = Email::new("a@x.COM").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn email_serde_roundtrip() {
        let email = Email::new("a@x.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(email, parsed);
    }
}
