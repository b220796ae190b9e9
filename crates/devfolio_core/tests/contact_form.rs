use devfolio_core::{
    ContactDelivery, ContactForm, ContactMessage, DeliveryAck, DeliveryError, FormField,
    FormStatus, SimulatedDelivery, SubmitOutcome,
};
use std::cell::Cell;
use std::str::FromStr;
use uuid::Uuid;

/// Delivery double that fails a configured number of times, then acks.
struct FlakyDelivery {
    failures_left: Cell<u32>,
}

impl FlakyDelivery {
    fn failing_once() -> Self {
        Self {
            failures_left: Cell::new(1),
        }
    }
}

impl ContactDelivery for FlakyDelivery {
    fn deliver(&self, _message: &ContactMessage) -> Result<DeliveryAck, DeliveryError> {
        let remaining = self.failures_left.get();
        if remaining > 0 {
            self.failures_left.set(remaining - 1);
            return Err(DeliveryError::Unavailable("connection refused".to_string()));
        }
        Ok(DeliveryAck {
            submission_id: Uuid::new_v4(),
        })
    }
}

fn fill_valid(form: &mut ContactForm<impl ContactDelivery>) {
    form.set_field(FormField::Name, "Jo");
    form.set_field(FormField::Email, "a@b.co");
    form.set_field(FormField::Message, "1234567890");
}

#[test]
fn valid_submission_delivers_and_clears_fields() {
    let mut form = ContactForm::new(SimulatedDelivery);
    fill_valid(&mut form);
    form.set_field(FormField::Subject, "Hello");

    let outcome = form.submit();
    assert!(matches!(outcome, SubmitOutcome::Delivered(_)));
    assert_eq!(form.status(), FormStatus::Success);
    assert!(form.values().is_empty());
    assert!(form.errors().is_empty());

    form.acknowledge_feedback();
    assert_eq!(form.status(), FormStatus::Idle);
}

#[test]
fn invalid_submission_records_errors_and_stays_idle() {
    let mut form = ContactForm::new(SimulatedDelivery);
    form.set_field(FormField::Email, "bad");
    form.set_field(FormField::Message, "short");

    assert_eq!(form.submit(), SubmitOutcome::Invalid);
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.errors().len(), 3);
    // Nothing was sent, so the typed values survive.
    assert_eq!(form.values().field(FormField::Email), "bad");
}

#[test]
fn editing_a_field_clears_its_stale_error() {
    let mut form = ContactForm::new(SimulatedDelivery);
    form.blur_field(FormField::Name);
    assert!(form.errors().contains_key(&FormField::Name));

    form.set_field(FormField::Name, "J");
    assert!(!form.errors().contains_key(&FormField::Name));

    // Blur re-validates the new value.
    form.blur_field(FormField::Name);
    assert!(form.errors().contains_key(&FormField::Name));
}

#[test]
fn blur_on_acceptable_value_removes_error() {
    let mut form = ContactForm::new(SimulatedDelivery);
    form.blur_field(FormField::Email);
    assert!(form.errors().contains_key(&FormField::Email));

    form.set_field(FormField::Email, "a@b.co");
    form.blur_field(FormField::Email);
    assert!(!form.errors().contains_key(&FormField::Email));
}

#[test]
fn delivery_failure_surfaces_banner_and_is_recoverable() {
    let mut form = ContactForm::new(FlakyDelivery::failing_once());
    fill_valid(&mut form);

    assert_eq!(form.submit(), SubmitOutcome::Failed);
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(
        form.banner(),
        Some("Something went wrong. Please try again.")
    );
    // Failed submissions keep the typed values for retry.
    assert!(!form.values().is_empty());

    // Resubmission recovers without touching the fields.
    let outcome = form.submit();
    assert!(matches!(outcome, SubmitOutcome::Delivered(_)));
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.banner(), None);
}

#[test]
fn subject_is_optional_for_submission() {
    let mut form = ContactForm::new(SimulatedDelivery);
    fill_valid(&mut form);
    // Subject left empty on purpose.
    assert!(matches!(form.submit(), SubmitOutcome::Delivered(_)));
}

#[test]
fn form_field_names_parse_from_wire_strings() {
    assert_eq!(FormField::from_str("email").expect("known field"), FormField::Email);
    assert_eq!(FormField::from_str(" Name ").expect("known field"), FormField::Name);
    assert!(FormField::from_str("phone").is_err());
    assert_eq!(FormField::Message.as_str(), "message");
}
