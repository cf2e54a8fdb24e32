//! Error types for the contact pipeline, all defined with `thiserror`.

use thiserror::Error;

/// Errors raised while talking to the transactional-email API.
#[derive(Error, Debug)]
pub enum MailApiError {
    /// Transport-level failure, including connection refusals and the
    /// blocking-task join in the async wrapper
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider answered with a non-success status other than 401/429
    #[error("Mail API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Provider answered 200 but the body did not parse as a receipt
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The call exceeded the configured request timeout
    #[error("Request timeout")]
    Timeout,

    /// Provider rejected the API key (401)
    #[error("Authentication failed")]
    Unauthorized,

    /// Provider throttled the sender (429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors raised while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// A variable is set but its value failed validation
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors the form controller sees when submitting through the gateway.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status. Carries the
    /// server-provided error text when the body could be parsed.
    #[error("Submission rejected (status {status})")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response (connection refused, DNS,
    /// timeout). The UI renders the bilingual fallback for this case.
    #[error("Network failure: {0}")]
    Network(String),
}

pub type MailApiResult<T> = Result<T, MailApiError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type SubmitResult<T> = Result<T, SubmitError>;
