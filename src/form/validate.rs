//! Per-field validation rules for the contact form.
//!
//! Every rule is a total function from raw input text to either an empty
//! string (valid) or a fixed human-readable error message. The view only
//! ever shows these messages verbatim, so the exact wording is load-bearing.

use std::sync::LazyLock;

use regex::Regex;

use super::Field;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Deliberately permissive: one `@`, at least one `.` in the domain part,
/// no whitespace. Do not tighten this; rejecting addresses a stricter RFC
/// check would catch is out of scope for an inline hint.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate a single field, returning an error message or `""` when valid.
///
/// Total and pure: any input yields a defined answer, never a panic.
#[must_use]
pub fn validate(field: Field, value: &str) -> &'static str {
    match field {
        Field::Name => {
            if value.is_empty() {
                NAME_REQUIRED
            } else if value.chars().count() < 2 {
                NAME_TOO_SHORT
            } else {
                ""
            }
        }
        Field::Email => {
            if value.is_empty() {
                EMAIL_REQUIRED
            } else if !EMAIL_RE.is_match(value) {
                EMAIL_INVALID
            } else {
                ""
            }
        }
        Field::Message => {
            if value.is_empty() {
                MESSAGE_REQUIRED
            } else if value.chars().count() < 10 {
                MESSAGE_TOO_SHORT
            } else {
                ""
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_required() {
        assert_eq!(validate(Field::Name, ""), NAME_REQUIRED);
        assert_eq!(validate(Field::Email, ""), EMAIL_REQUIRED);
        assert_eq!(validate(Field::Message, ""), MESSAGE_REQUIRED);
    }

    #[test]
    fn name_length_rule() {
        assert_eq!(validate(Field::Name, "A"), NAME_TOO_SHORT);
        assert_eq!(validate(Field::Name, "Al"), "");
    }

    #[test]
    fn email_pattern_rule() {
        assert_eq!(validate(Field::Email, "a@b.c"), "");
        assert_eq!(validate(Field::Email, "not-an-email"), EMAIL_INVALID);
        assert_eq!(validate(Field::Email, "a@b"), EMAIL_INVALID);
        assert_eq!(validate(Field::Email, "a b@c.d"), EMAIL_INVALID);
        assert_eq!(validate(Field::Email, "a@b@c.d"), EMAIL_INVALID);
    }

    #[test]
    fn message_length_rule() {
        assert_eq!(validate(Field::Message, "short"), MESSAGE_TOO_SHORT);
        assert_eq!(validate(Field::Message, "0123456789"), "");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // Two scalar values, four bytes.
        assert_eq!(validate(Field::Name, "éé"), "");
    }
}
