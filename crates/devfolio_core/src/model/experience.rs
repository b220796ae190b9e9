//! Work and education history records.

use serde::{Deserialize, Serialize};

/// Timeline entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    Work,
    Education,
}

/// One timeline entry, displayed strictly in source order.
///
/// `period` is a free-form display string; no date parsing or ordering is
/// enforced anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    /// Role or degree title.
    pub title: String,
    /// Employer or institution.
    pub organization: String,
    /// Display period, e.g. `"2022 - Present"`.
    pub period: String,
    /// One-paragraph summary.
    pub description: String,
    /// Ordered achievement bullet points.
    pub achievements: Vec<String>,
    /// Ordered technology chips.
    pub technologies: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(
        kind: ExperienceKind,
        title: impl Into<String>,
        organization: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            organization: organization.into(),
            period: period.into(),
            description: description.into(),
            achievements: Vec::new(),
            technologies: Vec::new(),
        }
    }
}
