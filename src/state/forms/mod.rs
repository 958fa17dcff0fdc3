//! Form domain layer
//!
//! Type-safe form handling for the contact page: fields, validation rules,
//! the submission payload and the submission lifecycle.

mod field;
mod form_state;
mod payload;
mod validation;

pub use field::FormField;
pub use form_state::{ContactForm, FeedbackPanel, PanelKind, SubmissionState, SubmitButton};
pub use payload::{SubmissionPayload, CONTACT_PHONE, CONTACT_PHONE_URI, RECIPIENT_EMAIL};
