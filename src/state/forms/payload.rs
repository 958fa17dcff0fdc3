//! Submission payload and the published contact details

use super::field::FormField;

/// Inbox that receives every contact form submission
pub const RECIPIENT_EMAIL: &str = "worldsedgewellness@gmail.com";
/// Phone number as printed on the site
pub const CONTACT_PHONE: &str = "(828) 490-1573";
/// Dialable form of [`CONTACT_PHONE`]
pub const CONTACT_PHONE_URI: &str = "tel:+1-828-490-1573";

/// Placeholder sent when the optional phone field is left blank
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Message assembled from the form for one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub recipient: String,
}

impl SubmissionPayload {
    /// Build a payload from the current field values, looked up by name
    pub fn from_fields(fields: &[FormField]) -> Self {
        let value_of = |name: &str| {
            fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.trim().to_string())
                .unwrap_or_default()
        };

        let phone = value_of("phone");
        Self {
            name: value_of("name"),
            email: value_of("email"),
            phone: if phone.is_empty() {
                PHONE_NOT_PROVIDED.to_string()
            } else {
                phone
            },
            message: value_of("message"),
            recipient: RECIPIENT_EMAIL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_phone_defaults_to_not_provided() {
        let fields = vec![
            FormField::text("name", "Name", true).with_value("Jo"),
            FormField::email("email", "Email", true).with_value("jo@x.com"),
            FormField::tel("phone", "Phone", false).with_value("  "),
            FormField::textarea("message", "Message", true).with_value("Hello there, testing."),
        ];

        let payload = SubmissionPayload::from_fields(&fields);

        assert_eq!(
            payload,
            SubmissionPayload {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                phone: "Not provided".to_string(),
                message: "Hello there, testing.".to_string(),
                recipient: "worldsedgewellness@gmail.com".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_phone_field_defaults_too() {
        let fields = vec![FormField::text("name", "Name", true).with_value("Jo")];
        let payload = SubmissionPayload::from_fields(&fields);
        assert_eq!(payload.phone, PHONE_NOT_PROVIDED);
        assert_eq!(payload.email, "");
    }

    #[test]
    fn test_phone_is_kept_when_given() {
        let fields = vec![FormField::tel("phone", "Phone", false).with_value("828-490-1573")];
        assert_eq!(SubmissionPayload::from_fields(&fields).phone, "828-490-1573");
    }
}
