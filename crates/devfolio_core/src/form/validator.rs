//! Pure field validation predicates.

use crate::model::contact::{ContactMessage, FormField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Minimum trimmed length for the name field.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum trimmed length for the message field.
pub const MIN_MESSAGE_CHARS: usize = 10;

// Shape check only: non-whitespace "@" non-whitespace "." non-whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validates one field; `None` means the value is acceptable.
///
/// `Subject` is optional and never produces an error.
pub fn validate_field(field: FormField, value: &str) -> Option<String> {
    let trimmed = value.trim();
    match field {
        FormField::Name => {
            if trimmed.is_empty() {
                Some("Name is required".to_string())
            } else if trimmed.chars().count() < MIN_NAME_CHARS {
                Some(format!("Name must be at least {MIN_NAME_CHARS} characters"))
            } else {
                None
            }
        }
        FormField::Email => {
            if trimmed.is_empty() {
                Some("Email is required".to_string())
            } else if !EMAIL_PATTERN.is_match(trimmed) {
                Some("Please enter a valid email address".to_string())
            } else {
                None
            }
        }
        FormField::Message => {
            if trimmed.is_empty() {
                Some("Message is required".to_string())
            } else if trimmed.chars().count() < MIN_MESSAGE_CHARS {
                Some(format!(
                    "Message must be at least {MIN_MESSAGE_CHARS} characters"
                ))
            } else {
                None
            }
        }
        FormField::Subject => None,
    }
}

/// Validates every field; an empty map means the form may be submitted.
pub fn validate_all(values: &ContactMessage) -> BTreeMap<FormField, String> {
    let mut errors = BTreeMap::new();
    for field in FormField::all() {
        if let Some(message) = validate_field(field, values.field(field)) {
            errors.insert(field, message);
        }
    }
    errors
}
