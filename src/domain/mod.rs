//! Domain value objects and types.
//!
//! Type-safe wrappers for the concepts the contact pipeline and the UI
//! layer share: validated email addresses and the site's display
//! language. Value objects validate at construction time so invalid data
//! cannot be represented further in.

pub mod email;
pub mod errors;
pub mod language;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use language::Language;
