//! Contact form controller.
//!
//! Binds to a [`FormView`], validates input field by field, submits once
//! through the [`ContactGateway`], and renders the outcome back into the
//! view. One attempt per call; a second attempt requires a new user
//! action.

use crate::domain::EmailAddress;
use crate::error::SubmitError;
use crate::models::ContactSubmission;
use crate::ui::gateway::ContactGateway;
use crate::ui::messages;
use crate::ui::state::UiState;
use crate::ui::telemetry::{AnalyticsEvent, NoopTelemetry, Telemetry};
use std::sync::Arc;

/// The fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Company,
    Budget,
    ProjectType,
    Message,
    Consent,
    /// Honeypot; hidden from real users.
    Website,
}

impl FormField {
    /// The fields a submission cannot go out without.
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Consent,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

/// Current value of a form field as the view reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Visual validity of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    /// No validation has touched the field yet.
    Neutral,
    Valid,
    Invalid { message: String },
}

/// View binding for the contact form region.
pub trait FormView {
    /// Current value of a field.
    fn value(&self, field: FormField) -> FieldValue;

    /// Toggle a field's visual validity state.
    fn set_field_state(&mut self, field: FormField, state: FieldState);

    /// Disable or re-enable the submit control and set its label.
    fn set_submitting(&mut self, submitting: bool, label: &str);

    /// Show the outcome banner under the form.
    fn show_status(&mut self, message: &str, success: bool);

    /// Clear every field and visual state.
    fn reset(&mut self);

    /// Announce a message to assistive technology.
    fn announce(&mut self, message: &str);
}

/// Controller for the contact form.
pub struct FormController<V: FormView> {
    view: V,
    gateway: Arc<dyn ContactGateway>,
    telemetry: Arc<dyn Telemetry>,
}

impl<V: FormView> FormController<V> {
    /// Create a controller with no-op telemetry.
    pub fn new(view: V, gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            view,
            gateway,
            telemetry: Arc::new(NoopTelemetry),
        }
    }

    /// Replace the telemetry sink.
    pub fn with_telemetry(mut self, telemetry: Arc<dyn Telemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Validate one field and reflect the result into the view.
    ///
    /// Required fields must be non-empty after trimming (a checkbox must
    /// be checked); the email field must also match the address shape.
    /// Optional fields always pass. Returns whether the field is valid.
    pub fn validate_field(&mut self, state: &UiState, field: FormField) -> bool {
        let lang = state.language;
        let error = match self.view.value(field) {
            FieldValue::Text(text) => {
                let text = text.trim().to_string();
                if field.is_required() && text.is_empty() {
                    Some(messages::required_field(lang))
                } else if field == FormField::Email
                    && !text.is_empty()
                    && !EmailAddress::is_valid(&text)
                {
                    Some(messages::invalid_email(lang))
                } else {
                    None
                }
            }
            FieldValue::Checked(checked) => {
                if field.is_required() && !checked {
                    Some(messages::required_field(lang))
                } else {
                    None
                }
            }
        };

        match error {
            None => {
                self.view.set_field_state(field, FieldState::Valid);
                true
            }
            Some(message) => {
                self.view.set_field_state(
                    field,
                    FieldState::Invalid {
                        message: message.to_string(),
                    },
                );
                false
            }
        }
    }

    /// Validate every required field; no short-circuit, so each field
    /// gets its visual feedback even when an earlier one already failed.
    pub fn validate_form(&mut self, state: &UiState) -> bool {
        let mut all_valid = true;
        for field in FormField::REQUIRED {
            if !self.validate_field(state, field) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Handle a submit action end to end.
    pub async fn handle_submit(&mut self, state: &UiState) {
        if !self.validate_form(state) {
            return;
        }

        // Honeypot check before anything leaves the page; same wording
        // as a server-side spam rejection
        if let FieldValue::Text(website) = self.view.value(FormField::Website) {
            if !website.trim().is_empty() {
                self.view.show_status(messages::invalid_submission(), false);
                return;
            }
        }

        let lang = state.language;
        self.view.set_submitting(true, messages::sending_label(lang));

        let submission = self.collect();
        let result = self.gateway.submit(&submission).await;

        // The affordance is cleared on every path before the outcome is
        // rendered
        self.view.set_submitting(false, messages::submit_label(lang));

        match result {
            Ok(outcome) if outcome.success => {
                self.view.show_status(messages::success(lang), true);
                self.view.reset();
                self.view.announce(messages::success(lang));
                self.telemetry.track(AnalyticsEvent::ContactFormSubmitted);
            }
            Ok(_) => {
                // 2xx body without the success flag
                self.view.show_status(messages::generic_error(lang), false);
                self.telemetry.track(AnalyticsEvent::ContactFormFailed {
                    reason: "rejected".to_string(),
                });
            }
            Err(SubmitError::Rejected { message, .. }) => {
                let text =
                    message.unwrap_or_else(|| messages::generic_error(lang).to_string());
                self.view.show_status(&text, false);
                self.telemetry.track(AnalyticsEvent::ContactFormFailed {
                    reason: "rejected".to_string(),
                });
            }
            Err(SubmitError::Network(_)) => {
                self.view.show_status(messages::network_fallback(), false);
                self.telemetry.track(AnalyticsEvent::ContactFormFailed {
                    reason: "network".to_string(),
                });
            }
        }
    }

    /// Build the wire payload from the current view values.
    fn collect(&self) -> ContactSubmission {
        let text = |field: FormField| match self.view.value(field) {
            FieldValue::Text(text) => text.trim().to_string(),
            FieldValue::Checked(_) => String::new(),
        };
        let optional = |field: FormField| {
            let value = text(field);
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };

        ContactSubmission {
            name: text(FormField::Name),
            email: text(FormField::Email),
            phone: optional(FormField::Phone),
            company: optional(FormField::Company),
            budget: optional(FormField::Budget),
            project_type: optional(FormField::ProjectType),
            message: text(FormField::Message),
            consent: matches!(
                self.view.value(FormField::Consent),
                FieldValue::Checked(true)
            ),
            website: optional(FormField::Website),
        }
    }
}
