//! Contact form state: values, touched flags, and inline errors.
//!
//! The form holds one [`FieldState`] per field of the closed [`Field`] set.
//! Errors become visible only once a field is touched (blurred at least once
//! or submission attempted); editing an untouched field never surfaces an
//! error, and editing a touched field revalidates on every keystroke.

use serde::{Deserialize, Serialize};

pub mod validate;

pub use validate::validate;

/// The closed set of contact form fields. Fields cannot be added or removed
/// at runtime; values, errors, and touched flags always cover exactly this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Placeholder text shown in an empty input, as on the original page.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

/// Everything the form tracks about one field.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    /// Raw text as last supplied by the view.
    pub value: String,
    /// Current validation message, `""` when valid. May be stale while the
    /// field is untouched; display is gated on `touched` anyway.
    pub error: &'static str,
    /// True once the field has lost focus or a submit was attempted.
    pub touched: bool,
}

impl FieldState {
    /// Whether the view should render this field's error inline.
    #[must_use]
    pub const fn shows_error(&self) -> bool {
        self.touched && !self.error.is_empty()
    }
}

/// Snapshot of the three field values, handed to a
/// [`MessageSink`](crate::delivery::MessageSink) on accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// All fields valid. Carries the validated values; the form itself has
    /// already been reset to its initial empty state.
    Accepted(FormValues),
    /// At least one field invalid. All fields are now touched and their
    /// errors populated so the view can show every violation at once.
    Rejected,
}

/// The contact form controller. Owned by a single view; all operations are
/// synchronous and never fail.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    message: FieldState,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    const fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Current values as an owned snapshot.
    #[must_use]
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Store a keystroke's worth of input. Revalidates only if the field has
    /// already been touched; a stale error on an untouched field is left
    /// alone since it is not displayed.
    pub fn update_field(&mut self, field: Field, value: &str) {
        let state = self.field_mut(field);
        state.value = value.to_string();
        if state.touched {
            state.error = validate(field, &state.value);
        }
    }

    /// The field lost focus: mark it touched and validate its current text.
    pub fn blur_field(&mut self, field: Field, value: &str) {
        let state = self.field_mut(field);
        state.value = value.to_string();
        state.touched = true;
        state.error = validate(field, &state.value);
    }

    /// Attempt submission. Revalidates every field from its current value and
    /// forces all touched flags on so every error becomes visible. When all
    /// fields validate, the form resets to its initial state and the accepted
    /// values are returned for delivery by the caller.
    pub fn submit(&mut self) -> Submission {
        let mut all_valid = true;
        for field in Field::ALL {
            let state = self.field_mut(field);
            state.touched = true;
            state.error = validate(field, &state.value);
            all_valid &= state.error.is_empty();
        }

        if all_valid {
            let accepted = self.values();
            *self = Self::default();
            Submission::Accepted(accepted)
        } else {
            Submission::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate::{EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED, NAME_TOO_SHORT};
    use super::*;

    #[test]
    fn update_before_blur_leaves_error_stale() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "J");
        assert_eq!(form.field(Field::Name).error, "");
        assert!(!form.field(Field::Name).touched);
        assert!(!form.field(Field::Name).shows_error());
    }

    #[test]
    fn blur_validates_and_touches() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "J");
        form.blur_field(Field::Name, "J");
        assert_eq!(form.field(Field::Name).error, NAME_TOO_SHORT);
        assert!(form.field(Field::Name).shows_error());
    }

    #[test]
    fn update_after_blur_revalidates_each_keystroke() {
        let mut form = ContactForm::new();
        form.blur_field(Field::Name, "J");
        assert_eq!(form.field(Field::Name).error, NAME_TOO_SHORT);
        form.update_field(Field::Name, "Jane");
        assert_eq!(form.field(Field::Name).error, "");
    }

    #[test]
    fn submit_empty_form_rejects_and_touches_all() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), Submission::Rejected);
        assert_eq!(form.field(Field::Name).error, NAME_REQUIRED);
        assert_eq!(form.field(Field::Email).error, EMAIL_REQUIRED);
        assert_eq!(form.field(Field::Message).error, MESSAGE_REQUIRED);
        for field in Field::ALL {
            assert!(form.field(field).touched);
        }
        // Values are untouched by a rejected submit.
        assert_eq!(form.values(), FormValues::default());
    }

    #[test]
    fn submit_valid_form_accepts_and_resets() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Jane");
        form.update_field(Field::Email, "jane@x.com");
        form.update_field(Field::Message, "Hello there, this works.");

        let outcome = form.submit();
        let expected = FormValues {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello there, this works.".to_string(),
        };
        assert_eq!(outcome, Submission::Accepted(expected));

        for field in Field::ALL {
            let state = form.field(field);
            assert!(state.value.is_empty());
            assert!(state.error.is_empty());
            assert!(!state.touched);
        }
        // The reset is real: an immediate resubmit rejects on empties.
        assert_eq!(form.submit(), Submission::Rejected);
    }
}
