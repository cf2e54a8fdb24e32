//! HTTP client for the transactional-email provider (Resend-compatible API).
//!
//! This module provides a synchronous HTTP client that can be used from
//! async contexts via `tokio::task::spawn_blocking`. The client handles
//! bearer-token authentication and error mapping for the provider's
//! `/emails` endpoint.

mod async_wrapper;
pub use async_wrapper::{Mailer, ResendMailer};

use crate::config::Config;
use crate::error::{MailApiError, MailApiResult};
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Categorization tag attached to an outbound email.
///
/// The provider only accepts ASCII letters, numbers, underscores, and
/// dashes in tag values, so [`EmailTag::new`] sanitizes the value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailTag {
    /// Tag name, e.g. `source`
    pub name: String,

    /// Tag value, e.g. `contact-form`
    pub value: String,
}

impl EmailTag {
    /// Build a tag with a sanitized value.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: sanitize_tag_value(value),
        }
    }
}

/// Lowercase a tag value and replace everything outside the provider's
/// accepted character set with underscores.
pub fn sanitize_tag_value(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A fully rendered email ready for dispatch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender identity, e.g. `Meltemi Studio <noreply@meltemistudio.gr>`
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    /// Optional reply-to address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,

    /// Plain-text body
    pub text: String,

    /// Provider-side categorization tags
    pub tags: Vec<EmailTag>,
}

/// Receipt returned by the provider after accepting an email.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SendReceipt {
    /// Opaque provider identifier for the accepted message
    pub id: String,
}

/// HTTP client for the transactional-email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be
/// called from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Provider API base URL, with or without a trailing slash
    base_url: String,

    /// Bearer token sent on every call
    api_key: String,

    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_base_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Counters for the API calls this client has made.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The one endpoint this client talks to.
    fn emails_endpoint(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }

    /// Dispatch one email through the provider.
    ///
    /// Issues a single `POST /emails` with no retry; the receipt id comes
    /// straight from the provider's response body.
    pub fn send_email(&self, email: &OutboundEmail) -> MailApiResult<SendReceipt> {
        let start = Instant::now();
        let url = self.emails_endpoint();

        tracing::debug!("POST {} (subject: {})", url, email.subject);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(email)
            .map_err(Self::map_error);

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Accepted (status: {})", url, response.status());
                self.metrics.record_api_call(duration);
            }
            Err(e) => {
                tracing::error!("POST {} failed: {:?}", url, e);
                self.metrics.record_api_failure();
                self.metrics.record_api_call(duration);
            }
        }

        let body = result?
            .into_string()
            .map_err(|e| MailApiError::HttpError(e.to_string()))?;

        let receipt: SendReceipt = serde_json::from_str(&body).map_err(MailApiError::JsonError)?;

        self.metrics.record_email_sent();
        Ok(receipt)
    }

    /// Map a ureq error to a MailApiError.
    fn map_error(error: ureq::Error) -> MailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                match code {
                    401 => MailApiError::Unauthorized,
                    429 => MailApiError::RateLimitExceeded,
                    _ => MailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    MailApiError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Io => MailApiError::Timeout,
                _ => MailApiError::HttpError(transport.to_string()),
            },
        }
    }
}
