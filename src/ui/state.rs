//! Shared UI application state.

use crate::domain::Language;

/// State shared across the UI controllers.
///
/// Owned by the UI layer and passed to controllers by the caller; no
/// other component mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// The active display language.
    pub language: Language,
}

impl UiState {
    /// Create state with the default language (English).
    pub fn new() -> Self {
        Self::default()
    }
}
