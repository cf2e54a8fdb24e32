use async_trait::async_trait;
use meltemi_site::error::{MailApiError, MailApiResult};
use meltemi_site::resend::{Mailer, OutboundEmail, SendReceipt};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock mailer for testing.
///
/// Records every send attempt and can be scripted to fail the Nth one,
/// which is how the notification-delivered/auto-reply-failed case is
/// exercised.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_on: Arc<Mutex<Option<usize>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockMailer {
    /// Create a mailer that accepts every send.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_on: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make the nth send attempt (1-based) fail with a provider error.
    pub fn fail_on_send(&self, n: usize) {
        *self.fail_on.lock().unwrap() = Some(n);
    }

    /// Every email handed to the mailer, in send order.
    pub fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts made.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<SendReceipt> {
        self.track_call("send");

        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        if *self.fail_on.lock().unwrap() == Some(attempt) {
            return Err(MailApiError::ApiError {
                status: 500,
                message: "Provider unavailable".to_string(),
            });
        }

        Ok(SendReceipt {
            id: format!("mock-{}", attempt),
        })
    }
}
