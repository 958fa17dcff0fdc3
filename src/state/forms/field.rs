//! Form field value objects

/// Semantic kind of a form input, which selects the validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    /// Fixed list of options; the value is always one of them
    Select(Vec<String>),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Inline error shown next to the field, if any
    pub error: Option<String>,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Create a single-line text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    /// Create an email field
    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required)
    }

    /// Create a telephone field
    pub fn tel(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Tel, required)
    }

    /// Create a multiline message field
    pub fn textarea(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Textarea, required)
    }

    /// Create a select field. An optional select starts blank.
    pub fn select(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        Self::new(name, label, FieldKind::Select(options), required)
    }

    /// Builder-style helper used when a field needs an initial value
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Textarea
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &self.kind {
            FieldKind::Select(_) => {
                // Selects change through cycle_option, typing is ignored
            }
            _ => self.value.push(c),
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &self.kind {
            FieldKind::Select(_) => self.value.clear(),
            _ => {
                self.value.pop();
            }
        }
    }

    /// Advance a select field to its next option, wrapping through blank
    pub fn cycle_option(&mut self) {
        let FieldKind::Select(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let next = match options.iter().position(|o| *o == self.value) {
            Some(i) if i + 1 < options.len() => options[i + 1].clone(),
            Some(_) if !self.required => String::new(),
            Some(_) => options[0].clone(),
            None => options[0].clone(),
        };
        self.value = next;
    }

    /// Clear the field value and any inline error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(_) if self.value.is_empty() => "Choose one (Enter)".to_string(),
            _ => self.value.clone(),
        }
    }
}
