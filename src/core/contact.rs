//! Contact form state and submission logic
//!
//! The form is a flat record of four required text fields. Submission is a
//! pure, synchronous state transition: a presence check across the fields
//! followed by either a rejection (fields untouched) or a success (fields
//! cleared). Nothing here talks to a server.

/// Status line shown when a required field is missing at submit time.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Status line shown after a successful submission.
pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";

/// The closed set of contact form fields.
///
/// Field updates are parameterized over this enum, so an invalid field name
/// is not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields, in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];
}

/// Outcome of the last submission attempt, rendered inline on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing submitted yet; no status line is shown.
    #[default]
    Idle,
    /// Submission rejected because at least one field was empty.
    MissingFields,
    /// Submission accepted; the fields have been cleared.
    Sent,
}

impl FormStatus {
    /// The user-visible status string. Empty while idle.
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::MissingFields => MISSING_FIELDS_MESSAGE,
            FormStatus::Sent => SENT_MESSAGE,
        }
    }

    pub fn is_sent(&self) -> bool {
        *self == FormStatus::Sent
    }

    pub fn is_error(&self) -> bool {
        *self == FormStatus::MissingFields
    }
}

/// In-memory state of the contact form.
///
/// Created empty on page mount, mutated field-by-field on input events, and
/// dropped when the page unmounts. There is no persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: FormStatus,
}

impl ContactForm {
    /// An empty form with no status line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the named field to `value`. No validation happens here.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Current value of the named field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Whether every field is non-empty.
    ///
    /// Emptiness is literal: a whitespace-only value counts as filled, the
    /// same way the browser's `required` attribute treats it.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Outcome of the last submission attempt.
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Validate and "send" the form.
    ///
    /// On a missing field the status becomes [`FormStatus::MissingFields`]
    /// and every field keeps its value, so the user can correct the input
    /// and resubmit. On success the status becomes [`FormStatus::Sent`] and
    /// all four fields are reset to empty strings.
    pub fn submit(&mut self) -> FormStatus {
        if !self.is_complete() {
            self.status = FormStatus::MissingFields;
            return self.status;
        }

        self.status = FormStatus::Sent;
        self.clear_fields();
        self.status
    }

    fn clear_fields(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::FullName, "Jane Doe");
        form.set(ContactField::Email, "jane@x.com");
        form.set(ContactField::Subject, "Order");
        form.set(ContactField::Message, "Where is my order?");
        form
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();

        for field in ContactField::ALL {
            assert_eq!(form.get(field), "");
        }
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.status().message(), "");
    }

    #[test]
    fn test_set_and_get_each_field() {
        let mut form = ContactForm::new();

        form.set(ContactField::FullName, "Jane Doe");
        form.set(ContactField::Email, "jane@x.com");
        form.set(ContactField::Subject, "Order");
        form.set(ContactField::Message, "Where is my order?");

        assert_eq!(form.get(ContactField::FullName), "Jane Doe");
        assert_eq!(form.get(ContactField::Email), "jane@x.com");
        assert_eq!(form.get(ContactField::Subject), "Order");
        assert_eq!(form.get(ContactField::Message), "Where is my order?");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = ContactForm::new();
        once.set(ContactField::Subject, "Hi");

        let mut twice = ContactForm::new();
        twice.set(ContactField::Subject, "Hi");
        twice.set(ContactField::Subject, "Hi");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Email, "c@d.com");

        assert_eq!(form.get(ContactField::Email), "c@d.com");
    }

    #[test]
    fn test_submit_with_missing_field_keeps_fields() {
        // Scenario: only the name is missing.
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Subject, "Hi");
        form.set(ContactField::Message, "Hello");
        let before = form.clone();

        let status = form.submit();

        assert_eq!(status, FormStatus::MissingFields);
        assert_eq!(status.message(), MISSING_FIELDS_MESSAGE);
        for field in ContactField::ALL {
            assert_eq!(form.get(field), before.get(field));
        }
    }

    #[test]
    fn test_submit_rejects_each_single_missing_field() {
        for missing in ContactField::ALL {
            let mut form = filled_form();
            form.set(missing, "");

            assert_eq!(form.submit(), FormStatus::MissingFields);
            assert!(!form.is_complete());
        }
    }

    #[test]
    fn test_submit_rejects_fully_empty_form() {
        let mut form = ContactForm::new();

        assert_eq!(form.submit(), FormStatus::MissingFields);
        assert_eq!(form.status(), FormStatus::MissingFields);
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let mut form = filled_form();

        let status = form.submit();

        assert_eq!(status, FormStatus::Sent);
        assert_eq!(status.message(), SENT_MESSAGE);
        for field in ContactField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled_form();
        form.set(ContactField::Subject, "   ");

        assert!(form.is_complete());
        assert_eq!(form.submit(), FormStatus::Sent);
    }

    #[test]
    fn test_resubmit_after_success_is_rejected() {
        let mut form = filled_form();
        assert_eq!(form.submit(), FormStatus::Sent);

        // The fields were cleared, so submitting again must fail.
        assert_eq!(form.submit(), FormStatus::MissingFields);
    }

    #[test]
    fn test_failed_submit_then_fix_then_succeed() {
        let mut form = filled_form();
        form.set(ContactField::Message, "");
        assert_eq!(form.submit(), FormStatus::MissingFields);

        form.set(ContactField::Message, "Where is my order?");
        assert_eq!(form.submit(), FormStatus::Sent);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(FormStatus::Idle.message(), "");
        assert_eq!(FormStatus::MissingFields.message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(FormStatus::Sent.message(), SENT_MESSAGE);

        assert!(FormStatus::Sent.is_sent());
        assert!(!FormStatus::Sent.is_error());
        assert!(FormStatus::MissingFields.is_error());
        assert!(!FormStatus::Idle.is_error());
    }
}
