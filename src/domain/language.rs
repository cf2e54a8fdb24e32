//! Display language for the bilingual site.

use std::fmt;

/// The two languages the site renders in.
///
/// English is the default; Greek is the alternate. The active language is
/// held in [`crate::ui::UiState`] and persisted through the UI layer's
/// preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    El,
}

impl Language {
    /// The short tag used in storage, the `?lang=` query parameter, and
    /// the root document language attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::El => "el",
        }
    }

    /// Parse a stored or user-supplied tag. Unknown values yield `None`
    /// so callers fall back to the default instead of erroring.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "el" => Some(Language::El),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
