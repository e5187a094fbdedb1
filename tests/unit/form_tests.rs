//! Contact form behavior against its published contract.

use folio::form::{ContactForm, Field, FormValues, Submission, validate};

#[test]
fn every_field_requires_input() {
    assert_eq!(validate(Field::Name, ""), "Name is required");
    assert_eq!(validate(Field::Email, ""), "Email is required");
    assert_eq!(validate(Field::Message, ""), "Message is required");
}

#[test]
fn email_rule_is_the_permissive_pattern() {
    assert_eq!(validate(Field::Email, "a@b.c"), "");
    assert_eq!(validate(Field::Email, "not-an-email"), "Invalid email address");
    // No dot after the domain part.
    assert_eq!(validate(Field::Email, "a@b"), "Invalid email address");
}

#[test]
fn name_and_message_have_minimum_lengths() {
    assert_eq!(validate(Field::Name, "A"), "Name must be at least 2 characters");
    assert_eq!(validate(Field::Name, "Al"), "");
    assert_eq!(
        validate(Field::Message, "short"),
        "Message must be at least 10 characters"
    );
    assert_eq!(validate(Field::Message, "0123456789"), "");
}

#[test]
fn untouched_fields_never_show_errors() {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, "J");
    assert_eq!(form.field(Field::Name).error, "");
    assert!(!form.field(Field::Name).shows_error());

    form.blur_field(Field::Name, "J");
    assert_eq!(
        form.field(Field::Name).error,
        "Name must be at least 2 characters"
    );
    assert!(form.field(Field::Name).shows_error());
}

#[test]
fn rejected_submit_touches_everything_and_keeps_values() {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, "Jane");

    assert_eq!(form.submit(), Submission::Rejected);

    for field in Field::ALL {
        assert!(form.field(field).touched);
    }
    assert_eq!(form.values().name, "Jane");
    assert_eq!(form.field(Field::Email).error, "Email is required");
    assert_eq!(form.field(Field::Message).error, "Message is required");
}

#[test]
fn accepted_submit_returns_values_and_resets() {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, "Jane");
    form.update_field(Field::Email, "jane@x.com");
    form.update_field(Field::Message, "Hello there, this works.");

    let Submission::Accepted(values) = form.submit() else {
        panic!("valid form must be accepted");
    };
    assert_eq!(
        values,
        FormValues {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello there, this works.".to_string(),
        }
    );

    for field in Field::ALL {
        let state = form.field(field);
        assert!(state.value.is_empty());
        assert!(state.error.is_empty());
        assert!(!state.touched);
    }
}

#[test]
fn touched_field_revalidates_on_keystrokes() {
    let mut form = ContactForm::new();
    form.blur_field(Field::Email, "a@b");
    assert_eq!(form.field(Field::Email).error, "Invalid email address");

    form.update_field(Field::Email, "a@b.c");
    assert_eq!(form.field(Field::Email).error, "");

    form.update_field(Field::Email, "a@b");
    assert_eq!(form.field(Field::Email).error, "Invalid email address");
}
