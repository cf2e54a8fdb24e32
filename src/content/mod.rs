//! Email documents for the contact pipeline.
//!
//! Two self-contained documents are rendered per accepted submission: the
//! notification sent to the studio inbox and the auto-reply sent back to
//! the submitter. Each carries an HTML and a plain-text body built from
//! the payload; optional fields are omitted entirely when absent rather
//! than rendered as empty rows.

pub mod auto_reply;
pub mod notification;

pub use auto_reply::AutoReplyEmail;
pub use notification::NotificationEmail;

/// A rendered email document: subject plus HTML and plain-text bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDocument {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Escape user text for interpolation into the HTML templates.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
