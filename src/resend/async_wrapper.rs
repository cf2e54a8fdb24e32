//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous client by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a
//! dedicated thread pool, preventing blocking of the async runtime.

use crate::error::{MailApiError, MailApiResult};
use crate::resend::{OutboundEmail, ResendClient, SendReceipt};
use async_trait::async_trait;
use std::sync::Arc;

/// Async port the submission pipeline dispatches emails through.
///
/// Abstracting over the provider client keeps the pipeline testable with
/// an in-memory mailer and leaves the provider swappable.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch one email; returns the provider's receipt.
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendReceipt>;
}

/// `Mailer` backed by the synchronous client on the blocking pool.
#[derive(Clone)]
pub struct ResendMailer {
    client: Arc<ResendClient>,
}

impl ResendMailer {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendReceipt> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| MailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
