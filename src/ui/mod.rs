//! Headless UI controllers for the site's interactive regions.
//!
//! Each controller binds to an explicit view trait that a real frontend
//! implements: the contact form, the language toggle, and the portfolio
//! and blog filters. Controllers own no global state; the caller hands
//! them the shared [`UiState`]. Telemetry is an injected capability with
//! a no-op default.

pub mod filter;
pub mod form;
pub mod gateway;
pub mod language;
pub mod messages;
pub mod state;
pub mod telemetry;

pub use filter::{FilterGroup, FilterItem, FilterView, ALL_KEY};
pub use form::{FieldState, FieldValue, FormController, FormField, FormView};
pub use gateway::{ContactGateway, HttpContactGateway, SubmissionOutcome};
pub use language::{DocumentShell, LanguageToggle, PreferenceStore, LANGUAGE_KEY, LANGUAGE_PARAM};
pub use state::UiState;
pub use telemetry::{AnalyticsEvent, NoopTelemetry, Telemetry};
