//! Email normalization
//!
//! Emails are compared case-insensitively, so the queried form is always
//! lowercase. Nothing else about the input is checked or changed.

use serde::{Deserialize, Serialize};

/// Lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Lowercase an email address.
    ///
    /// # Example
    /// ```
    /// use lightbnb_core::models::Email;
    ///
    /// assert_eq!(Email::new("Tristan@Example.com").as_str(), "tristan@example.com");
    /// assert_eq!(Email::new("not-an-email").as_str(), "not-an-email");
    /// ```
    pub fn new(s: &str) -> Self {
        Self(s.to_lowercase())
    }

    /// Get the normalized email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
