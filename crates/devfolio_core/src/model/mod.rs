//! Domain records for the portfolio presentation core.
//!
//! # Responsibility
//! - Define the immutable content records (projects, skills, experience).
//! - Define the theme preference and contact-form value types.
//!
//! # Invariants
//! - Content records never change after load; `ContactMessage` is the only
//!   mutable record and is owned by the form component.

pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;
pub mod theme;
