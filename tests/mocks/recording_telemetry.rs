use meltemi_site::ui::{AnalyticsEvent, Telemetry};
use std::sync::{Arc, Mutex};

/// Telemetry sink that records every event for assertions.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingTelemetry {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

#[allow(dead_code)]
impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Telemetry for RecordingTelemetry {
    fn track(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}
