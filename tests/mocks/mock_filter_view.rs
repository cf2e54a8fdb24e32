use meltemi_site::ui::FilterView;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock filter view recording the active key and item visibility.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockFilterView {
    inner: Arc<Mutex<FilterInner>>,
}

#[derive(Default)]
struct FilterInner {
    active: Option<String>,
    activations: Vec<String>,
    visibility: HashMap<String, bool>,
}

#[allow(dead_code)]
impl MockFilterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<String> {
        self.inner.lock().unwrap().active.clone()
    }

    /// Every key passed to `set_active`, in call order.
    pub fn activations(&self) -> Vec<String> {
        self.inner.lock().unwrap().activations.clone()
    }

    pub fn is_visible(&self, item_id: &str) -> Option<bool> {
        self.inner.lock().unwrap().visibility.get(item_id).copied()
    }
}

impl FilterView for MockFilterView {
    fn set_active(&mut self, key: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.active = Some(key.to_string());
        inner.activations.push(key.to_string());
    }

    fn set_item_visible(&mut self, item_id: &str, visible: bool) {
        self.inner
            .lock()
            .unwrap()
            .visibility
            .insert(item_id.to_string(), visible);
    }
}
