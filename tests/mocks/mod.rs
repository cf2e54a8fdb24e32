//! In-memory fakes shared by the integration tests.

pub mod mock_document;
pub mod mock_filter_view;
pub mod mock_form_view;
pub mod mock_gateway;
pub mod mock_mailer;
pub mod recording_telemetry;

#[allow(unused_imports)]
pub use mock_document::{MemoryPreferenceStore, MockDocumentShell};
#[allow(unused_imports)]
pub use mock_filter_view::MockFilterView;
#[allow(unused_imports)]
pub use mock_form_view::MockFormView;
#[allow(unused_imports)]
pub use mock_gateway::{GatewayScript, MockGateway};
#[allow(unused_imports)]
pub use mock_mailer::MockMailer;
#[allow(unused_imports)]
pub use recording_telemetry::RecordingTelemetry;
