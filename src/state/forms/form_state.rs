//! Contact form state and submission lifecycle
//!
//! A [`ContactForm`] owns everything about one form on the page: its fields,
//! focus, the submit control, feedback panels and the cleanup timers for
//! them. Submitting is split around the one asynchronous step: the caller
//! takes the payload from [`ContactForm::begin_submit`], sends it however it
//! likes, and hands the outcome to [`ContactForm::finish_submit`].

use super::field::FormField;
use super::payload::{SubmissionPayload, CONTACT_PHONE, RECIPIENT_EMAIL};
use super::validation::{validate, ValidationResult};
use crate::delivery::DeliveryError;
use std::time::{Duration, Instant};

/// Label of the submit control when idle
pub const SUBMIT_LABEL: &str = "Send Message";
/// Label of the submit control while a send is pending
pub const BUSY_LABEL: &str = "Sending...";
/// Screen reader announcement after a successful send
pub const SUCCESS_ANNOUNCEMENT: &str = "Your message has been sent successfully!";

const DEFAULT_PANEL_TIMEOUT: Duration = Duration::from_secs(10);

const SUCCESS_TITLE: &str = "Thank you for your message!";
const ERROR_TITLE: &str = "Message Not Sent";
const ERROR_SUMMARY: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

/// Topics offered by the select field
const TOPICS: &[&str] = &[
    "Individual therapy",
    "Couples therapy",
    "Consultation call",
    "Something else",
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

/// The form's submit control
#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    /// Label to restore once the pending send finishes
    original_label: Option<String>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            enabled: true,
            original_label: None,
        }
    }
}

impl SubmitButton {
    fn set_busy(&mut self) {
        self.enabled = false;
        self.original_label = Some(std::mem::replace(&mut self.label, BUSY_LABEL.to_string()));
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label = self
            .original_label
            .take()
            .unwrap_or_else(|| SUBMIT_LABEL.to_string());
    }

    pub fn is_busy(&self) -> bool {
        !self.enabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Success,
    Error,
}

/// Page-level message shown above the form after a send
#[derive(Debug, Clone)]
pub struct FeedbackPanel {
    pub id: u64,
    pub kind: PanelKind,
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cleanup {
    RemovePanel(u64),
    RemovePanelAndShowForm(u64),
}

#[derive(Debug, Clone)]
struct ScheduledCleanup {
    due: Instant,
    action: Cleanup,
}

/// One contact form and its submission state
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    /// Focused row; `fields.len()` is the submit control
    pub active_field_index: usize,
    pub submit: SubmitButton,
    pub state: SubmissionState,
    /// Hidden while the success panel is up
    pub hidden: bool,
    pub panels: Vec<FeedbackPanel>,
    cleanups: Vec<ScheduledCleanup>,
    next_panel_id: u64,
    panel_timeout: Duration,
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            submit: SubmitButton::default(),
            state: SubmissionState::Idle,
            hidden: false,
            panels: Vec::new(),
            cleanups: Vec::new(),
            next_panel_id: 0,
            panel_timeout: DEFAULT_PANEL_TIMEOUT,
        }
    }

    /// The contact form as laid out on the Contact page
    pub fn contact_page() -> Self {
        Self::new(vec![
            FormField::text("name", "Name", true),
            FormField::email("email", "Email", true),
            FormField::tel("phone", "Phone (optional)", false),
            FormField::select("topic", "Topic (optional)", TOPICS, false),
            FormField::textarea("message", "Message", true),
        ])
    }

    pub fn with_panel_timeout(mut self, timeout: Duration) -> Self {
        self.panel_timeout = timeout;
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn active(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    fn active_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Type into the focused field. Any inline error is dropped straight
    /// away; the field is checked again on blur or submit.
    pub fn handle_input(&mut self, c: char) {
        if self.hidden {
            return;
        }
        if let Some(field) = self.active_mut() {
            field.push_char(c);
            field.error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.hidden {
            return;
        }
        if let Some(field) = self.active_mut() {
            field.pop_char();
            field.error = None;
        }
    }

    /// Enter inside the form: newline in the message, next option in a
    /// select. Returns false when Enter has no meaning for the focused row.
    pub fn handle_enter(&mut self) -> bool {
        if self.hidden {
            return false;
        }
        match self.active_mut() {
            Some(field) if field.is_multiline() => {
                field.value.push('\n');
                field.error = None;
                true
            }
            Some(field) if field.is_select() => {
                field.cycle_option();
                field.error = None;
                true
            }
            _ => false,
        }
    }

    /// Re-check one field after it loses focus
    pub fn handle_blur(&mut self, index: usize) -> Option<ValidationResult> {
        if self.hidden {
            return None;
        }
        let field = self.fields.get_mut(index)?;
        let result = validate(field);
        field.error = result.message.clone();
        Some(result)
    }

    /// Move focus to `index`, validating the field being left
    pub fn focus(&mut self, index: usize) {
        if self.hidden {
            return;
        }
        let previous = self.active_field_index;
        self.set_active_field(index);
        if previous != self.active_field_index {
            self.handle_blur(previous);
        }
    }

    pub fn focus_next(&mut self) {
        if self.hidden {
            return;
        }
        let previous = self.active_field_index;
        self.next_field();
        self.handle_blur(previous);
    }

    pub fn focus_prev(&mut self) {
        if self.hidden {
            return;
        }
        let previous = self.active_field_index;
        self.prev_field();
        self.handle_blur(previous);
    }

    /// Validate every required field, showing each message inline.
    /// Returns true when all of them pass.
    pub fn validate_required(&mut self) -> bool {
        let mut all_valid = true;
        for field in self.fields.iter_mut().filter(|f| f.required) {
            let result = validate(field);
            if !result.valid {
                all_valid = false;
            }
            field.error = result.message;
        }
        all_valid
    }

    /// First half of a submit: validate, lock the submit control, build the
    /// payload. `None` means nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.hidden || self.is_busy() || !self.submit.enabled {
            return None;
        }

        self.state = SubmissionState::Validating;
        if !self.validate_required() {
            tracing::debug!("Contact form has invalid fields, not sending");
            self.state = SubmissionState::Idle;
            return None;
        }

        self.state = SubmissionState::Sending;
        self.submit.set_busy();
        let payload = SubmissionPayload::from_fields(&self.fields);
        tracing::info!("Sending contact form from {}", payload.email);
        Some(payload)
    }

    /// Second half of a submit, once the delivery outcome is known.
    /// Returns the announcement for assistive output, if any.
    pub fn finish_submit(
        &mut self,
        result: Result<(), DeliveryError>,
        now: Instant,
    ) -> Option<String> {
        if self.state != SubmissionState::Sending {
            tracing::warn!("Delivery finished while form was {:?}", self.state);
        }

        let announcement = match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                let id = self.push_panel(
                    PanelKind::Success,
                    SUCCESS_TITLE,
                    vec![format!(
                        "Your message has been sent to {RECIPIENT_EMAIL}. I'll get back to you \
                         as soon as possible, typically within 1-2 business days."
                    )],
                );
                self.hidden = true;
                self.reset_fields();
                self.schedule(now, Cleanup::RemovePanelAndShowForm(id));
                Some(SUCCESS_ANNOUNCEMENT.to_string())
            }
            Err(e) => {
                tracing::error!("Email sending failed: {}", e);
                self.state = SubmissionState::Failed;
                let id = self.push_panel(
                    PanelKind::Error,
                    ERROR_TITLE,
                    vec![ERROR_SUMMARY.to_string(), direct_contact_line()],
                );
                self.schedule(now, Cleanup::RemovePanel(id));
                None
            }
        };

        self.submit.restore();
        announcement
    }

    /// Run every cleanup that is due
    pub fn tick(&mut self, now: Instant) {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.cleanups.drain(..).partition(|c| c.due <= now);
        self.cleanups = pending;

        for cleanup in due {
            match cleanup.action {
                Cleanup::RemovePanel(id) => self.remove_panel(id),
                Cleanup::RemovePanelAndShowForm(id) => {
                    self.remove_panel(id);
                    self.hidden = false;
                }
            }
        }
    }

    fn push_panel(&mut self, kind: PanelKind, title: &str, lines: Vec<String>) -> u64 {
        let id = self.next_panel_id;
        self.next_panel_id += 1;
        self.panels.push(FeedbackPanel {
            id,
            kind,
            title: title.to_string(),
            lines,
        });
        id
    }

    fn remove_panel(&mut self, id: u64) {
        self.panels.retain(|p| p.id != id);
    }

    fn schedule(&mut self, now: Instant, action: Cleanup) {
        self.cleanups.push(ScheduledCleanup {
            due: now + self.panel_timeout,
            action,
        });
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::contact_page()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields plus the submit control
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

/// Direct contact details offered when sending fails
fn direct_contact_line() -> String {
    format!("You can also reach me directly at {RECIPIENT_EMAIL} or {CONTACT_PHONE}.")
}
