//! Validated email address value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Shape check for submitted addresses: one `@`, at least one `.` in the
/// domain part, no whitespace anywhere. Deliverability is the provider's
/// problem, not ours.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// An email address that passed the shape check at construction, so any
/// `EmailAddress` held further in is known to look like `local@domain.tld`.
///
/// Submission validation and the form controller only need the check
/// itself and go through [`EmailAddress::is_valid`]; configured addresses
/// are parsed into the owned form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` when the value does not
    /// match the `local@domain.tld` shape.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(Self(email))
    }

    /// Run the shape check against a raw string without constructing.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
