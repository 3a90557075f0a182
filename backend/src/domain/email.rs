//! Normalised email addresses.
//!
//! Every lookup and uniqueness check keys on the normalised form, so the
//! normalisation lives in one constructor instead of at each call site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`EmailAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    Empty,
}

/// Email trimmed of surrounding whitespace and lowercased.
///
/// ## Invariants
/// - Non-empty.
/// - Equal to its own trimmed, lowercased form.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::EmailAddress;
///
/// let email = EmailAddress::parse("  Jane.Doe@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "jane.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalise and validate raw input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Borrow the normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
