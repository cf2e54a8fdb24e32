//! Contact submission service.
//!
//! Validates an incoming submission, renders the notification and
//! auto-reply documents, and dispatches both through the email provider.
//! The two sends are sequential and both awaited; there is no retry,
//! queueing, or persistence.

use crate::config::Config;
use crate::content::{AutoReplyEmail, NotificationEmail};
use crate::error::MailApiError;
use crate::metrics::Metrics;
use crate::models::submission::non_blank;
use crate::models::{ContactSubmission, SubmissionError};
use crate::resend::{EmailTag, Mailer, OutboundEmail, SendReceipt};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Errors produced while processing a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    /// The payload failed validation. Maps to a 400 response.
    #[error(transparent)]
    Invalid(#[from] SubmissionError),

    /// The provider rejected or failed a send. Maps to a 500 response.
    #[error(transparent)]
    Dispatch(#[from] MailApiError),
}

/// Submission service trait for the contact pipeline.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Process one submission end to end.
    ///
    /// Returns the provider receipt of the notification send. An
    /// auto-reply failure after a delivered notification still returns
    /// an error; callers cannot observe partial success.
    async fn process(
        &self,
        submission: ContactSubmission,
    ) -> Result<SendReceipt, SubmissionServiceError>;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    mailer: Arc<dyn Mailer>,
    contact_recipient: String,
    mail_from: String,
    contact_reply_to: String,
    metrics: Metrics,
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(mailer: Arc<dyn Mailer>, config: &Config) -> Self {
        Self {
            mailer,
            contact_recipient: config.contact_recipient.clone(),
            mail_from: config.mail_from.clone(),
            contact_reply_to: config.contact_reply_to.clone(),
            metrics: Metrics::new(),
        }
    }

    /// Get the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the notification email for the studio inbox.
    ///
    /// Reply-to is the submitter so the studio can answer directly from
    /// the notification.
    fn build_notification(&self, submission: &ContactSubmission) -> OutboundEmail {
        let document = NotificationEmail {
            submission,
            received_at: Utc::now(),
        }
        .render();

        let band = submission.budget_band();
        let project = non_blank(&submission.project_type).unwrap_or("unspecified");

        OutboundEmail {
            from: self.mail_from.clone(),
            to: vec![self.contact_recipient.clone()],
            reply_to: Some(submission.email.trim().to_string()),
            subject: document.subject,
            html: document.html,
            text: document.text,
            tags: vec![
                EmailTag::new("source", "contact-form"),
                EmailTag::new("budget", band.tag_value()),
                EmailTag::new("project", project),
            ],
        }
    }

    /// Build the auto-reply email for the submitter.
    fn build_auto_reply(&self, submission: &ContactSubmission) -> OutboundEmail {
        let document = AutoReplyEmail {
            name: &submission.name,
        }
        .render();

        OutboundEmail {
            from: self.mail_from.clone(),
            to: vec![submission.email.trim().to_string()],
            reply_to: Some(self.contact_reply_to.clone()),
            subject: document.subject,
            html: document.html,
            text: document.text,
            tags: vec![
                EmailTag::new("source", "contact-form"),
                EmailTag::new("type", "auto-reply"),
            ],
        }
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    async fn process(
        &self,
        submission: ContactSubmission,
    ) -> Result<SendReceipt, SubmissionServiceError> {
        self.metrics.record_submission_received();

        if let Err(e) = submission.validate() {
            match &e {
                SubmissionError::Honeypot => {
                    self.metrics.record_submission_spam();
                    tracing::info!("Dropping submission: honeypot field filled");
                }
                other => {
                    self.metrics.record_submission_rejected();
                    tracing::info!("Rejecting submission: {}", other);
                }
            }
            return Err(e.into());
        }

        let notification = self.build_notification(&submission);
        let auto_reply = self.build_auto_reply(&submission);

        let receipt = match self.mailer.send(&notification).await {
            Ok(receipt) => receipt,
            Err(e) => {
                self.metrics.record_provider_error();
                tracing::error!("Notification send failed: {}", e);
                return Err(e.into());
            }
        };
        tracing::info!("Notification delivered (id {})", receipt.id);

        if let Err(e) = self.mailer.send(&auto_reply).await {
            self.metrics.record_provider_error();
            tracing::error!(
                "Auto-reply send failed after notification {}: {}",
                receipt.id,
                e
            );
            return Err(e.into());
        }
        tracing::info!("Auto-reply delivered to submitter");

        Ok(receipt)
    }
}
