//! Field validation rules for the contact form
//!
//! Rules are checked in a fixed order and the first one that applies decides
//! the verdict, so exactly one message is ever shown for a field.

use super::field::{FieldKind, FormField};
use regex::Regex;
use std::sync::LazyLock;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_PHONE: &str = "Please enter a valid phone number (10-15 digits).";
pub const MSG_MESSAGE_SHORT: &str =
    "Please provide a more detailed message (at least 10 characters).";
pub const MSG_MESSAGE_LONG: &str = "Message is too long (maximum 2000 characters).";
pub const MSG_NAME_SHORT: &str = "Please enter your full name (at least 2 characters).";
pub const MSG_NAME_CHARS: &str = "Name can only contain letters, spaces, hyphens, and apostrophes.";

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;
const MESSAGE_MIN_CHARS: usize = 10;
const MESSAGE_MAX_CHARS: usize = 2000;
const NAME_MIN_CHARS: usize = 2;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-'.]+$").expect("name pattern compiles"));

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Validate a field against its kind. Pure; displaying the result is the
/// form's job.
pub fn validate(field: &FormField) -> ValidationResult {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required {
            ValidationResult::invalid(MSG_REQUIRED)
        } else {
            ValidationResult::ok()
        };
    }

    match &field.kind {
        FieldKind::Email => validate_email(value),
        FieldKind::Tel => validate_phone(value),
        FieldKind::Textarea => validate_message(value),
        FieldKind::Text if field.name == "name" => validate_name(value),
        FieldKind::Text | FieldKind::Select(_) => ValidationResult::ok(),
    }
}

fn validate_email(value: &str) -> ValidationResult {
    if EMAIL_RE.is_match(value) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(MSG_EMAIL)
    }
}

/// Strip the separators people type into phone numbers
fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+' | '.')))
        .collect()
}

fn validate_phone(value: &str) -> ValidationResult {
    let digits = strip_phone_separators(value);
    let len = digits.chars().count();
    let in_range = (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len);
    if in_range && digits.chars().all(|c| c.is_ascii_digit()) {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(MSG_PHONE)
    }
}

fn validate_message(value: &str) -> ValidationResult {
    let len = value.chars().count();
    if len < MESSAGE_MIN_CHARS {
        ValidationResult::invalid(MSG_MESSAGE_SHORT)
    } else if len > MESSAGE_MAX_CHARS {
        ValidationResult::invalid(MSG_MESSAGE_LONG)
    } else {
        ValidationResult::ok()
    }
}

fn validate_name(value: &str) -> ValidationResult {
    if value.chars().count() < NAME_MIN_CHARS {
        ValidationResult::invalid(MSG_NAME_SHORT)
    } else if !NAME_RE.is_match(value) {
        ValidationResult::invalid(MSG_NAME_CHARS)
    } else {
        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, name: &str, required: bool, value: &str) -> FormField {
        let base = match kind {
            FieldKind::Text => FormField::text(name, name, required),
            FieldKind::Email => FormField::email(name, name, required),
            FieldKind::Tel => FormField::tel(name, name, required),
            FieldKind::Textarea => FormField::textarea(name, name, required),
            FieldKind::Select(options) => {
                let options: Vec<&str> = options.iter().map(String::as_str).collect();
                FormField::select(name, name, &options, required)
            }
        };
        base.with_value(value)
    }

    mod required {
        use super::*;

        #[test]
        fn test_blank_required_fails_for_every_kind() {
            let kinds = [
                FieldKind::Text,
                FieldKind::Email,
                FieldKind::Tel,
                FieldKind::Textarea,
                FieldKind::Select(vec!["A".to_string()]),
            ];
            for kind in kinds {
                for blank in ["", "   ", "\n\t"] {
                    let result = validate(&field(kind.clone(), "x", true, blank));
                    assert_eq!(result, ValidationResult::invalid(MSG_REQUIRED), "{kind:?}");
                }
            }
        }

        #[test]
        fn test_required_check_wins_over_kind_rule() {
            let result = validate(&field(FieldKind::Text, "name", true, " "));
            assert_eq!(result.message.as_deref(), Some(MSG_REQUIRED));
        }

        #[test]
        fn test_blank_optional_fields_are_valid() {
            assert!(validate(&field(FieldKind::Tel, "phone", false, "")).valid);
            assert!(validate(&field(FieldKind::Email, "email", false, "  ")).valid);
            assert!(validate(&field(FieldKind::Textarea, "message", false, "")).valid);
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_addresses() {
            for value in ["jo@x.com", "first.last@mail.example.org", "a+b@c.io"] {
                assert!(validate(&field(FieldKind::Email, "email", true, value)).valid, "{value}");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for value in ["jo", "jo@x", "jo@@x.com", "j o@x.com", "@x.com", "jo@.", "jo@x."] {
                let result = validate(&field(FieldKind::Email, "email", true, value));
                assert_eq!(result.message.as_deref(), Some(MSG_EMAIL), "{value}");
            }
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(validate(&field(FieldKind::Email, "email", true, "  jo@x.com ")).valid);
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_formatted_numbers() {
            for value in ["(828) 490-1573", "+1-828-490-1573", "828.490.1573", "123456789012345"] {
                assert!(validate(&field(FieldKind::Tel, "phone", false, value)).valid, "{value}");
            }
        }

        #[test]
        fn test_rejects_bad_lengths_and_letters() {
            for value in ["490-1573", "1234567890123456", "828-490-CALL", "828 490 157x"] {
                let result = validate(&field(FieldKind::Tel, "phone", false, value));
                assert_eq!(result.message.as_deref(), Some(MSG_PHONE), "{value}");
            }
        }

        #[test]
        fn test_strip_phone_separators() {
            assert_eq!(strip_phone_separators("+1 (828) 490-15.73"), "18284901573");
        }
    }

    mod message {
        use super::*;

        #[test]
        fn test_bounds() {
            let ok_short = "a".repeat(10);
            let ok_long = "a".repeat(2000);
            assert!(validate(&field(FieldKind::Textarea, "message", true, &ok_short)).valid);
            assert!(validate(&field(FieldKind::Textarea, "message", true, &ok_long)).valid);

            let short = validate(&field(FieldKind::Textarea, "message", true, "too short"));
            assert_eq!(short.message.as_deref(), Some(MSG_MESSAGE_SHORT));

            let long = "a".repeat(2001);
            let long = validate(&field(FieldKind::Textarea, "message", true, &long));
            assert_eq!(long.message.as_deref(), Some(MSG_MESSAGE_LONG));
        }

        #[test]
        fn test_length_is_measured_after_trim() {
            let padded = format!("   {}   ", "a".repeat(9));
            let result = validate(&field(FieldKind::Textarea, "message", true, &padded));
            assert_eq!(result.message.as_deref(), Some(MSG_MESSAGE_SHORT));
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_single_character_is_too_short() {
            let result = validate(&field(FieldKind::Text, "name", true, "A"));
            assert_eq!(result.message.as_deref(), Some(MSG_NAME_SHORT));
        }

        #[test]
        fn test_allowed_characters() {
            for value in ["Jo", "Mary-Jane O'Neil", "J. R. Smith"] {
                assert!(validate(&field(FieldKind::Text, "name", true, value)).valid, "{value}");
            }
        }

        #[test]
        fn test_digits_are_rejected() {
            let result = validate(&field(FieldKind::Text, "name", true, "R2D2"));
            assert_eq!(result.message.as_deref(), Some(MSG_NAME_CHARS));
        }

        #[test]
        fn test_other_text_fields_have_no_name_rule() {
            assert!(validate(&field(FieldKind::Text, "company", true, "R2")).valid);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let f = field(FieldKind::Tel, "phone", true, "12-34");
        assert_eq!(validate(&f), validate(&f));
        let g = field(FieldKind::Email, "email", true, "jo@x.com");
        assert_eq!(validate(&g), validate(&g));
    }

    #[test]
    fn test_select_with_value_is_valid() {
        let f = field(FieldKind::Select(vec!["A".to_string()]), "topic", true, "A");
        assert!(validate(&f).valid);
    }
}
