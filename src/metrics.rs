//! Counters for the contact pipeline.
//!
//! The submission service tracks pipeline outcomes (received, rejected,
//! spam, dispatch failures) while the provider client tracks the API
//! calls it makes. Both share this collector type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cheaply cloneable counter set. Clones share the same underlying
/// atomics, so a clone handed to another thread stays in sync.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions that entered the pipeline
    submissions_received_total: Arc<AtomicU64>,

    /// Submissions rejected by validation (missing fields, bad email)
    submissions_rejected_total: Arc<AtomicU64>,

    /// Submissions caught by the honeypot check
    submissions_spam_total: Arc<AtomicU64>,

    /// Emails accepted by the provider
    emails_sent_total: Arc<AtomicU64>,

    /// Dispatch failures as seen by the pipeline
    provider_errors_total: Arc<AtomicU64>,

    /// Calls issued to the provider API
    api_calls_total: Arc<AtomicU64>,

    /// Provider API calls that failed
    api_failures_total: Arc<AtomicU64>,

    /// Wall time spent in provider API calls, in milliseconds
    api_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            submissions_received_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_spam_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            provider_errors_total: Arc::new(AtomicU64::new(0)),
            api_calls_total: Arc::new(AtomicU64::new(0)),
            api_failures_total: Arc::new(AtomicU64::new(0)),
            api_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Count a submission entering the pipeline.
    pub fn record_submission_received(&self) {
        self.submissions_received_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Count a submission rejected by validation.
    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Count a submission caught by the honeypot.
    pub fn record_submission_spam(&self) {
        self.submissions_spam_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an email accepted by the provider.
    pub fn record_email_sent(&self) {
        self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a dispatch failure.
    pub fn record_provider_error(&self) {
        self.provider_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one provider API call and how long it took. Failed calls
    /// are counted here too, alongside [`Metrics::record_api_failure`].
    pub fn record_api_call(&self, duration: Duration) {
        self.api_calls_total.fetch_add(1, Ordering::Relaxed);
        self.api_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Count a failed provider API call.
    pub fn record_api_failure(&self) {
        self.api_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_received_total(&self) -> u64 {
        self.submissions_received_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_spam_total(&self) -> u64 {
        self.submissions_spam_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn provider_errors_total(&self) -> u64 {
        self.provider_errors_total.load(Ordering::Relaxed)
    }

    pub fn api_calls_total(&self) -> u64 {
        self.api_calls_total.load(Ordering::Relaxed)
    }

    pub fn api_failures_total(&self) -> u64 {
        self.api_failures_total.load(Ordering::Relaxed)
    }

    pub fn api_duration_total_ms(&self) -> u64 {
        self.api_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Mean provider API call duration in milliseconds, zero when no
    /// calls have been made.
    pub fn api_duration_avg_ms(&self) -> f64 {
        let calls = self.api_calls_total();
        if calls == 0 {
            return 0.0;
        }
        self.api_duration_total_ms() as f64 / calls as f64
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.submissions_received_total.store(0, Ordering::Relaxed);
        self.submissions_rejected_total.store(0, Ordering::Relaxed);
        self.submissions_spam_total.store(0, Ordering::Relaxed);
        self.emails_sent_total.store(0, Ordering::Relaxed);
        self.provider_errors_total.store(0, Ordering::Relaxed);
        self.api_calls_total.store(0, Ordering::Relaxed);
        self.api_failures_total.store(0, Ordering::Relaxed);
        self.api_duration_total_ms.store(0, Ordering::Relaxed);
    }

    /// Snapshot every counter at once.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_received_total: self.submissions_received_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            submissions_spam_total: self.submissions_spam_total(),
            emails_sent_total: self.emails_sent_total(),
            provider_errors_total: self.provider_errors_total(),
            api_calls_total: self.api_calls_total(),
            api_failures_total: self.api_failures_total(),
            api_duration_total_ms: self.api_duration_total_ms(),
            api_duration_avg_ms: self.api_duration_avg_ms(),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub submissions_received_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_spam_total: u64,
    pub emails_sent_total: u64,
    pub provider_errors_total: u64,
    pub api_calls_total: u64,
    pub api_failures_total: u64,
    pub api_duration_total_ms: u64,
    pub api_duration_avg_ms: f64,
}
