use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// A single contact form submission as it is handed to the email relay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The three fields bound by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 3] {
        [ContactField::Name, ContactField::Email, ContactField::Message]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Constraint violations of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return Some(FieldError::Required);
        }
        if field == ContactField::Email && !EmailAddress::is_valid(value) {
            return Some(FieldError::InvalidEmail);
        }
        None
    }

    /// All violated fields, in form order
    pub fn errors(&self) -> Vec<(ContactField, FieldError)> {
        ContactField::all()
            .into_iter()
            .filter_map(|field| self.error(field).map(|e| (field, e)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        ContactField::all()
            .into_iter()
            .all(|field| self.error(field).is_none())
    }

    /// The submission with surrounding whitespace stripped from every field,
    /// i.e. exactly the values that validation looked at
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }
}

/// View-bound draft of a contact submission.
///
/// Errors are only surfaced for touched fields so a fresh form renders clean.
/// `pending` is set between handing a payload to the relay and hearing back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub values: ContactSubmission,
    touched: [bool; 3],
    pending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(field: ContactField) -> usize {
        match field {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    pub fn touch(&mut self, field: ContactField) {
        self.touched[Self::index(field)] = true;
    }

    pub fn touch_all(&mut self) {
        self.touched = [true; 3];
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched[Self::index(field)]
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.values.error(field)
    }

    pub fn visible_error(&self, field: ContactField) -> Option<FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Validates the draft and, if it passes, marks it pending and returns the
    /// payload to relay. Invalid drafts get every field touched instead.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if !self.values.is_valid() {
            self.touch_all();
            return None;
        }
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.values.trimmed())
    }

    /// Records the relay outcome. A delivered message clears the form; a failed
    /// one keeps the values so the user can retry.
    pub fn settle(&mut self, delivered: bool) {
        self.pending = false;
        if delivered {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, name);
        form.set(ContactField::Email, email);
        form.set(ContactField::Message, message);
        form
    }

    #[test]
    fn valid_submission_has_no_errors() {
        let submission = ContactSubmission::new("Ana", "ana@x.com", "Hi");
        assert!(submission.is_valid());
        assert!(submission.errors().is_empty());
    }

    #[test]
    fn empty_and_malformed_fields_are_reported_in_order() {
        let submission = ContactSubmission::new("", "bad", "");
        assert_eq!(
            submission.errors(),
            vec![
                (ContactField::Name, FieldError::Required),
                (ContactField::Email, FieldError::InvalidEmail),
                (ContactField::Message, FieldError::Required),
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let submission = ContactSubmission::new("   ", " ana@x.com ", "\n\t");
        assert_eq!(submission.error(ContactField::Name), Some(FieldError::Required));
        assert_eq!(submission.error(ContactField::Email), None);
        assert_eq!(submission.error(ContactField::Message), Some(FieldError::Required));
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let submission = ContactSubmission::new("Ana", "ana.x.com", "Hi");
        assert_eq!(
            submission.error(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn fresh_form_shows_no_errors_until_touched() {
        let mut form = ContactForm::new();
        assert_eq!(form.error(ContactField::Name), Some(FieldError::Required));
        assert_eq!(form.visible_error(ContactField::Name), None);

        form.touch(ContactField::Name);
        assert_eq!(form.visible_error(ContactField::Name), Some(FieldError::Required));
        assert_eq!(form.visible_error(ContactField::Email), None);
    }

    #[test]
    fn invalid_submit_touches_every_field() {
        let mut form = filled("", "bad", "");

        assert_eq!(form.begin_submit(), None);

        for field in ContactField::all() {
            assert!(form.is_touched(field), "{} not touched", field.as_str());
            assert!(form.visible_error(field).is_some());
        }
        assert!(!form.is_pending());
    }

    #[test]
    fn valid_submit_returns_payload_once() {
        let mut form = filled("Ana", "ana@x.com", "Hi");

        let payload = form.begin_submit();

        assert_eq!(payload, Some(ContactSubmission::new("Ana", "ana@x.com", "Hi")));
        assert!(form.is_pending());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn submitted_payload_is_trimmed() {
        let mut form = filled("  Ana ", " ana@x.com ", "\nHi there\n");

        let payload = form.begin_submit().unwrap();

        assert_eq!(payload, ContactSubmission::new("Ana", "ana@x.com", "Hi there"));
        assert!(payload.is_valid());
        assert!(EmailAddress::is_valid(&payload.email));
        // The draft itself is left as typed
        assert_eq!(form.value(ContactField::Email), " ana@x.com ");
    }

    #[test]
    fn delivered_settle_resets_form() {
        let mut form = filled("Ana", "ana@x.com", "Hi");
        form.begin_submit();

        form.settle(true);

        assert_eq!(form, ContactForm::default());
        assert_eq!(form.value(ContactField::Name), "");
        assert_eq!(form.value(ContactField::Email), "");
        assert_eq!(form.value(ContactField::Message), "");
    }

    #[test]
    fn failed_settle_keeps_values_and_allows_retry() {
        let mut form = filled("Ana", "ana@x.com", "Hi");
        form.begin_submit();

        form.settle(false);

        assert_eq!(form.values, ContactSubmission::new("Ana", "ana@x.com", "Hi"));
        assert!(!form.is_pending());
        assert!(form.begin_submit().is_some());
    }
}
