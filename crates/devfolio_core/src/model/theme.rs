//! Theme preference and resolved color scheme.
//!
//! # Responsibility
//! - Define the persisted preference value and its string round-trip.
//! - Resolve `system` against an externally supplied OS scheme.
//!
//! # Invariants
//! - The persisted representation is one of `light|dark|system`.
//! - Unknown persisted strings never fail loudly; callers fall back to
//!   [`ThemePreference::System`].

use serde::{Deserialize, Serialize};

/// User-selected theme preference, persisted as a single string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Stable string value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parses a persisted value; `None` for anything unknown so callers can
    /// degrade to the default instead of erroring.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Next preference in the toggle cycle: light -> dark -> system -> light.
    pub fn cycled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Resolves this preference to a concrete scheme, consulting the given
    /// OS-level scheme only when the preference is `system`.
    pub fn resolve(self, system_scheme: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system_scheme,
        }
    }
}

/// Concrete scheme applied by the rendering shell as a style-scope marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Style-scope class name consumed by presentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
