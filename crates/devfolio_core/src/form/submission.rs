//! Contact-form status machine and the delivery endpoint seam.
//!
//! # Responsibility
//! - Drive idle -> submitting -> success|error transitions around one
//!   delivery call.
//! - Keep the per-field error map consistent with user edits.
//!
//! # Invariants
//! - Submission is rejected while any field error is present.
//! - Delivery failure surfaces one recoverable banner, never a panic.

use crate::form::validator::{validate_all, validate_field};
use crate::model::contact::{ContactMessage, FormField};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Banner shown for any delivery failure; detail stays in the logs.
pub const SUBMIT_FAILURE_BANNER: &str = "Something went wrong. Please try again.";

/// Acknowledgement returned by a delivery endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAck {
    /// Endpoint-assigned id for the accepted submission.
    pub submission_id: Uuid,
}

/// Delivery endpoint failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The endpoint refused the payload.
    Rejected(String),
    /// The endpoint could not be reached.
    Unavailable(String),
}

impl Display for DeliveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "delivery rejected: {message}"),
            Self::Unavailable(message) => write!(f, "delivery endpoint unavailable: {message}"),
        }
    }
}

impl Error for DeliveryError {}

/// External message-delivery endpoint seam.
///
/// Real deployments wire this to an HTTP collaborator; the bundled
/// [`SimulatedDelivery`] stands in until one exists.
pub trait ContactDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<DeliveryAck, DeliveryError>;
}

/// Stub endpoint that acknowledges every payload without transmitting it.
#[derive(Debug, Default)]
pub struct SimulatedDelivery;

impl ContactDelivery for SimulatedDelivery {
    fn deliver(&self, _message: &ContactMessage) -> Result<DeliveryAck, DeliveryError> {
        let ack = DeliveryAck {
            submission_id: Uuid::new_v4(),
        };
        info!(
            "event=contact_deliver module=form status=simulated submission_id={}",
            ack.submission_id
        );
        Ok(ack)
    }
}

/// Form status flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were recorded; nothing was sent.
    Invalid,
    /// The endpoint acknowledged the message.
    Delivered(DeliveryAck),
    /// The endpoint failed; the banner is set and resubmission may recover.
    Failed,
}

/// Contact-form state machine over an injectable delivery endpoint.
pub struct ContactForm<D: ContactDelivery> {
    delivery: D,
    values: ContactMessage,
    errors: BTreeMap<FormField, String>,
    status: FormStatus,
    banner: Option<String>,
}

impl<D: ContactDelivery> ContactForm<D> {
    pub fn new(delivery: D) -> Self {
        Self {
            delivery,
            values: ContactMessage::default(),
            errors: BTreeMap::new(),
            status: FormStatus::Idle,
            banner: None,
        }
    }

    pub fn values(&self) -> &ContactMessage {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Banner message for the last delivery failure, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Records an input change and clears that field's stale error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set_field(field, value);
        self.errors.remove(&field);
    }

    /// Runs single-field validation, as on an input blur event.
    pub fn blur_field(&mut self, field: FormField) {
        match validate_field(field, self.values.field(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Validates everything and, when clean, runs one delivery call.
    ///
    /// The status passes through `Submitting` for the duration of the call
    /// and lands on `Success` or `Error`; validation failures leave the
    /// status at `Idle` with the error map populated.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate_all(&self.values);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.errors.clear();
        self.banner = None;
        self.status = FormStatus::Submitting;
        info!("event=contact_submit module=form status=start");

        match self.delivery.deliver(&self.values) {
            Ok(ack) => {
                self.values = ContactMessage::default();
                self.status = FormStatus::Success;
                info!(
                    "event=contact_submit module=form status=ok submission_id={}",
                    ack.submission_id
                );
                SubmitOutcome::Delivered(ack)
            }
            Err(err) => {
                self.status = FormStatus::Error;
                self.banner = Some(SUBMIT_FAILURE_BANNER.to_string());
                warn!("event=contact_submit module=form status=error error={err}");
                SubmitOutcome::Failed
            }
        }
    }

    /// Returns a success/error display back to idle.
    ///
    /// The shell calls this when the feedback display window elapses; the
    /// core keeps no timers.
    pub fn acknowledge_feedback(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
            self.banner = None;
        }
    }
}
