//! Theme preference persistence and resolution.
//!
//! # Responsibility
//! - Persist the single theme preference through a pluggable backend.
//! - Resolve `system` against an injected OS scheme signal.
//! - Notify subscribers when the preference changes.
//!
//! # Invariants
//! - Storage failures degrade silently to an in-memory session value; they
//!   are logged and never surfaced to callers.
//! - Exactly one logical thread mutates the store (interior mutability uses
//!   `Cell`/`RefCell`, never locks).

mod store;

pub use store::{
    FixedSchemeSource, MemoryPreferenceBackend, PrefError, PrefResult, PreferenceBackend,
    PreferenceStore, SqlitePreferenceBackend, SubscriptionId, SystemSchemeSource,
    DEFAULT_PREFERENCE_KEY,
};
