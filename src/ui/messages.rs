//! Localized UI strings for the form controller.
//!
//! Strings exist in English and Greek; the caller's `UiState` decides
//! which one is shown. The network fallback is deliberately bilingual so
//! it reads regardless of the active language.

use crate::domain::Language;

/// Error shown under an empty required field.
pub fn required_field(lang: Language) -> &'static str {
    match lang {
        Language::En => "This field is required",
        Language::El => "Αυτό το πεδίο είναι υποχρεωτικό",
    }
}

/// Error shown under a malformed email field.
pub fn invalid_email(lang: Language) -> &'static str {
    match lang {
        Language::En => "Please provide a valid email address",
        Language::El => "Παρακαλούμε δώστε μια έγκυρη διεύθυνση email",
    }
}

/// Label of the submit control while the request is in flight.
pub fn sending_label(lang: Language) -> &'static str {
    match lang {
        Language::En => "Sending...",
        Language::El => "Αποστολή...",
    }
}

/// Resting label of the submit control.
pub fn submit_label(lang: Language) -> &'static str {
    match lang {
        Language::En => "Send message",
        Language::El => "Αποστολή μηνύματος",
    }
}

/// Banner shown after a successful submission.
pub fn success(lang: Language) -> &'static str {
    match lang {
        Language::En => "Your message has been sent. We will get back to you soon.",
        Language::El => "Το μήνυμά σας εστάλη. Θα επικοινωνήσουμε σύντομα μαζί σας.",
    }
}

/// Generic rejection banner when the server gives no message.
pub fn generic_error(lang: Language) -> &'static str {
    match lang {
        Language::En => "Something went wrong. Please try again.",
        Language::El => "Κάτι πήγε στραβά. Παρακαλούμε δοκιμάστε ξανά.",
    }
}

/// Banner for a honeypot rejection; matches the server's wording.
pub fn invalid_submission() -> &'static str {
    "Invalid submission"
}

/// Bilingual fallback shown when the request never reached the server.
pub fn network_fallback() -> &'static str {
    "Could not send your message. Please email us at hello@meltemistudio.gr. / \
     Δεν ήταν δυνατή η αποστολή του μηνύματος. Στείλτε μας email στο hello@meltemistudio.gr."
}
