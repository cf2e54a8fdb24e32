use meltemi_site::domain::Language;
use meltemi_site::ui::{DocumentShell, PreferenceStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory preference store (browser local storage analogue).
///
/// Cloned handles share the same map, so a second controller created
/// over a clone sees what the first one persisted.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

#[allow(dead_code)]
impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored value before the controller runs.
    pub fn preload(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// Mock document shell with a set of bound translated nodes.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDocumentShell {
    inner: Arc<Mutex<ShellInner>>,
}

struct BoundNode {
    id: String,
    en: String,
    el: String,
}

#[derive(Default)]
struct ShellInner {
    nodes: Vec<BoundNode>,
    rendered: HashMap<String, String>,
    root_language: Option<Language>,
    query_params: HashMap<String, String>,
    active_toggle: Option<Language>,
}

#[allow(dead_code)]
impl MockDocumentShell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ShellInner::default())),
        }
    }

    /// Bind a node carrying both language texts.
    pub fn bind_node(&self, id: &str, en: &str, el: &str) {
        self.inner.lock().unwrap().nodes.push(BoundNode {
            id: id.to_string(),
            en: en.to_string(),
            el: el.to_string(),
        });
    }

    /// The text a bound node currently shows.
    pub fn rendered_text(&self, id: &str) -> Option<String> {
        self.inner.lock().unwrap().rendered.get(id).cloned()
    }

    pub fn root_language(&self) -> Option<Language> {
        self.inner.lock().unwrap().root_language
    }

    pub fn query_param(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().query_params.get(key).cloned()
    }

    pub fn active_toggle(&self) -> Option<Language> {
        self.inner.lock().unwrap().active_toggle
    }
}

impl Default for MockDocumentShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentShell for MockDocumentShell {
    fn set_root_language(&mut self, lang: Language) {
        self.inner.lock().unwrap().root_language = Some(lang);
    }

    fn set_query_param(&mut self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .query_params
            .insert(key.to_string(), value.to_string());
    }

    fn render_language(&mut self, lang: Language) {
        let mut inner = self.inner.lock().unwrap();
        let texts: Vec<(String, String)> = inner
            .nodes
            .iter()
            .map(|node| {
                let text = match lang {
                    Language::En => node.en.clone(),
                    Language::El => node.el.clone(),
                };
                (node.id.clone(), text)
            })
            .collect();
        for (id, text) in texts {
            inner.rendered.insert(id, text);
        }
    }

    fn set_active_toggle(&mut self, lang: Language) {
        self.inner.lock().unwrap().active_toggle = Some(lang);
    }
}
