use meltemi_site::ui::{FieldState, FieldValue, FormField, FormView};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock form view for testing.
///
/// Holds field values in memory and records every state change the
/// controller makes. Cloned handles share the same inner state, so a
/// test keeps one handle while the controller owns another.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockFormView {
    inner: Arc<Mutex<FormViewInner>>,
}

#[derive(Default)]
struct FormViewInner {
    values: HashMap<FormField, FieldValue>,
    field_states: HashMap<FormField, FieldState>,
    submitting: bool,
    submit_label: String,
    status: Option<(String, bool)>,
    announcements: Vec<String>,
    resets: usize,
    submitting_transitions: Vec<bool>,
}

#[allow(dead_code)]
impl MockFormView {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormViewInner::default())),
        }
    }

    pub fn set_text(&self, field: FormField, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .values
            .insert(field, FieldValue::Text(value.to_string()));
    }

    pub fn set_checked(&self, field: FormField, checked: bool) {
        self.inner
            .lock()
            .unwrap()
            .values
            .insert(field, FieldValue::Checked(checked));
    }

    /// Fill the required fields with a valid submission.
    pub fn fill_valid(&self) {
        self.set_text(FormField::Name, "Jane");
        self.set_text(FormField::Email, "jane@x.com");
        self.set_text(FormField::Message, "Hi");
        self.set_checked(FormField::Consent, true);
    }

    pub fn field_state(&self, field: FormField) -> Option<FieldState> {
        self.inner.lock().unwrap().field_states.get(&field).cloned()
    }

    pub fn status(&self) -> Option<(String, bool)> {
        self.inner.lock().unwrap().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.lock().unwrap().submitting
    }

    pub fn submit_label(&self) -> String {
        self.inner.lock().unwrap().submit_label.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.inner.lock().unwrap().resets
    }

    pub fn announcements(&self) -> Vec<String> {
        self.inner.lock().unwrap().announcements.clone()
    }

    /// Every value passed to `set_submitting`, in call order.
    pub fn submitting_transitions(&self) -> Vec<bool> {
        self.inner.lock().unwrap().submitting_transitions.clone()
    }
}

impl Default for MockFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for MockFormView {
    fn value(&self, field: FormField) -> FieldValue {
        let inner = self.inner.lock().unwrap();
        inner
            .values
            .get(&field)
            .cloned()
            .unwrap_or_else(|| match field {
                FormField::Consent => FieldValue::Checked(false),
                _ => FieldValue::Text(String::new()),
            })
    }

    fn set_field_state(&mut self, field: FormField, state: FieldState) {
        self.inner.lock().unwrap().field_states.insert(field, state);
    }

    fn set_submitting(&mut self, submitting: bool, label: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.submitting = submitting;
        inner.submit_label = label.to_string();
        inner.submitting_transitions.push(submitting);
    }

    fn show_status(&mut self, message: &str, success: bool) {
        self.inner.lock().unwrap().status = Some((message.to_string(), success));
    }

    fn reset(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.values.clear();
        inner.field_states.clear();
        inner.resets += 1;
    }

    fn announce(&mut self, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .announcements
            .push(message.to_string());
    }
}
