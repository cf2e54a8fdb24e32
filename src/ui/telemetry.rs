//! Analytics capability for the UI controllers.
//!
//! The telemetry port is always present; callers that do not care about
//! analytics get [`NoopTelemetry`]. No call site checks for existence.

/// Events the UI layer emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// The contact form was submitted and accepted.
    ContactFormSubmitted,
    /// The contact form submission failed, with a coarse reason label.
    ContactFormFailed { reason: String },
}

/// Capability trait for emitting analytics events.
pub trait Telemetry: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// Telemetry sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn track(&self, _event: AnalyticsEvent) {}
}
