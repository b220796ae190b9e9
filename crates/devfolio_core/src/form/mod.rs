//! Contact-form validation and submission flow.
//!
//! # Responsibility
//! - Pure per-field predicates and the whole-form error map.
//! - The form status machine over an injectable delivery endpoint.
//!
//! # Invariants
//! - Validation is side-effect free.
//! - Submission never proceeds while any field error is present.

pub mod submission;
pub mod validator;

pub use submission::{
    ContactDelivery, ContactForm, DeliveryAck, DeliveryError, FormStatus, SimulatedDelivery,
    SubmitOutcome, SUBMIT_FAILURE_BANNER,
};
pub use validator::{validate_all, validate_field, MIN_MESSAGE_CHARS, MIN_NAME_CHARS};
