//! Contact submission model and validation.

use crate::domain::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contact form submission as it travels over the wire.
///
/// Every field is defaulted so a payload with missing keys still parses;
/// [`ContactSubmission::validate`] then reports the missing required
/// fields by name instead of failing at deserialization. Nothing here is
/// ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Submitter name, required
    pub name: String,

    /// Submitter email, required, validated against the `local@domain.tld` shape
    pub email: String,

    /// Optional phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Optional budget range as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Optional project type as free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Message body, required
    pub message: String,

    /// Privacy-policy consent, must be true
    pub consent: bool,

    /// Honeypot field; legitimate users never fill it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Treat a blank optional field as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ContactSubmission {
    /// Check the payload against the submission rules.
    ///
    /// Order matters: missing required fields first (all of them listed in
    /// one message), then the honeypot, then the email shape. Emptiness is
    /// judged after trimming.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if self.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if self.message.trim().is_empty() {
            missing.push("message".to_string());
        }
        if !self.consent {
            missing.push("consent".to_string());
        }
        if !missing.is_empty() {
            return Err(SubmissionError::MissingFields(missing));
        }

        if self.is_spam() {
            return Err(SubmissionError::Honeypot);
        }

        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(SubmissionError::InvalidEmail(self.email.trim().to_string()));
        }

        Ok(())
    }

    /// Whether the honeypot field carries a value.
    pub fn is_spam(&self) -> bool {
        non_blank(&self.website).is_some()
    }

    /// Presentational priority band derived from the budget text.
    pub fn budget_band(&self) -> BudgetBand {
        BudgetBand::from_budget(self.budget.as_deref())
    }
}

/// Reasons a submission is rejected before any email is dispatched.
///
/// Every variant maps to a 400 response; the display text is what the
/// caller sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// One or more required fields are absent or blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The honeypot field carried a value. The message stays generic so
    /// bots learn nothing from the response.
    #[error("Invalid submission")]
    Honeypot,

    /// The email does not have the `local@domain.tld` shape. Carries the
    /// offending value for logging; the display text stays stable.
    #[error("Please provide a valid email address")]
    InvalidEmail(String),
}

/// Coarse priority band derived from the submitted budget string.
///
/// Purely presentational: it colors a marker in the notification email
/// and feeds a provider tag, never control flow. Matching is by
/// substring, so "15000" lands in the medium band; that mirrors how the
/// site's budget picker values are written ("5000-10000", "10000+").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    High,
    Medium,
    Standard,
}

impl BudgetBand {
    /// Derive the band: a budget containing "10000+" is high, one
    /// containing "5000" is medium, anything else is standard.
    pub fn from_budget(budget: Option<&str>) -> Self {
        match budget {
            Some(value) if value.contains("10000+") => BudgetBand::High,
            Some(value) if value.contains("5000") => BudgetBand::Medium,
            _ => BudgetBand::Standard,
        }
    }

    /// Provider tag value for the band.
    pub fn tag_value(self) -> &'static str {
        match self {
            BudgetBand::High => "high",
            BudgetBand::Medium => "medium",
            BudgetBand::Standard => "standard",
        }
    }

    /// Marker label rendered in the notification email.
    pub fn label(self) -> &'static str {
        match self {
            BudgetBand::High => "High priority",
            BudgetBand::Medium => "Medium priority",
            BudgetBand::Standard => "Standard",
        }
    }

    /// Marker color rendered in the notification email.
    pub fn color(self) -> &'static str {
        match self {
            BudgetBand::High => "#dc2626",
            BudgetBand::Medium => "#d97706",
            BudgetBand::Standard => "#64748b",
        }
    }
}
