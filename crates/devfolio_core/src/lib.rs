//! Presentation-state core for the devfolio single-page portfolio.
//! This crate is the single source of truth for everything beneath the
//! rendering shell: theme preference, view state, form validation and the
//! static content tables.

pub mod content;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod theme;
pub mod view;

pub use content::{
    featured_projects, filter_projects, ContentError, ContentResult, ContentSource, SiteProfile,
    StaticContentSource, FILTER_ALL,
};
pub use form::{
    validate_all, validate_field, ContactDelivery, ContactForm, DeliveryAck, DeliveryError,
    FormStatus, SimulatedDelivery, SubmitOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactMessage, FormField, UnknownFieldError};
pub use model::experience::{ExperienceEntry, ExperienceKind};
pub use model::project::{Project, ProjectId};
pub use model::skill::{SkillBand, SkillCategory, SkillEntry, SkillSet};
pub use model::theme::{ColorScheme, ThemePreference};
pub use theme::{
    FixedSchemeSource, MemoryPreferenceBackend, PreferenceBackend, PreferenceStore,
    SqlitePreferenceBackend, SystemSchemeSource,
};
pub use view::ViewState;

/// Minimal health-check API for early shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
