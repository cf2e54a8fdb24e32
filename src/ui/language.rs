//! Language toggle controller.
//!
//! Persists the visitor's choice under one preference key, reflects it
//! into the URL query parameter and the document's root language
//! attributes, and re-renders every bound translated node.

use crate::domain::Language;
use crate::ui::state::UiState;

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "meltemi_lang";

/// URL query parameter reflecting the active language.
pub const LANGUAGE_PARAM: &str = "lang";

/// Persisted-preference port (browser local storage analogue).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Document-level bindings the toggle manipulates.
pub trait DocumentShell {
    /// Set the root document language attributes.
    fn set_root_language(&mut self, lang: Language);

    /// Reflect a value into the URL query string. Write-only; the
    /// parameter is never read back.
    fn set_query_param(&mut self, key: &str, value: &str);

    /// Re-render every bound node with its text for the language.
    fn render_language(&mut self, lang: Language);

    /// Mark the toggle control for the language as the active one.
    fn set_active_toggle(&mut self, lang: Language);
}

/// Controller for the language switcher.
pub struct LanguageToggle<S: PreferenceStore, D: DocumentShell> {
    store: S,
    shell: D,
}

impl<S: PreferenceStore, D: DocumentShell> LanguageToggle<S, D> {
    pub fn new(store: S, shell: D) -> Self {
        Self { store, shell }
    }

    /// Apply the stored preference, defaulting to English.
    ///
    /// The stored value wins over any other source.
    pub fn init(&mut self, state: &mut UiState) {
        let stored = self
            .store
            .get(LANGUAGE_KEY)
            .and_then(|value| Language::from_tag(&value));
        self.apply(state, stored.unwrap_or_default());
    }

    /// Switch the active language and persist the choice.
    pub fn set_language(&mut self, state: &mut UiState, lang: Language) {
        self.apply(state, lang);
    }

    fn apply(&mut self, state: &mut UiState, lang: Language) {
        state.language = lang;
        self.store.set(LANGUAGE_KEY, lang.tag());
        self.shell.set_query_param(LANGUAGE_PARAM, lang.tag());
        self.shell.set_root_language(lang);
        self.shell.render_language(lang);
        self.shell.set_active_toggle(lang);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shell(&self) -> &D {
        &self.shell
    }
}
