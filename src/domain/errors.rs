//! Validation errors for domain value objects.

use std::fmt;

/// Rejection raised when a value object is constructed from input that
/// fails its shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not have the `local@domain.tld` email shape.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "not a valid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
