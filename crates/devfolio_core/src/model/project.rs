//! Project record.
//!
//! # Responsibility
//! - Define the canonical portfolio project shape served by content sources.
//!
//! # Invariants
//! - `id` is unique within one content source.
//! - `tags` are stored lowercase; callers filter case-insensitively.

use serde::{Deserialize, Serialize};

/// Stable identifier for a portfolio project within one content source.
pub type ProjectId = u32;

/// One portfolio project as rendered in the gallery.
///
/// Optional fields stay `None` for projects without a public demo, source
/// repository or artwork; the record is loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique id within the serving content source.
    pub id: ProjectId,
    /// Short display title.
    pub title: String,
    /// One-paragraph summary shown on the card.
    pub description: String,
    /// Optional long-form description for a detail view.
    pub long_description: Option<String>,
    /// Ordered lowercase tags used by gallery filtering.
    pub tags: Vec<String>,
    /// Optional live demo URL.
    pub demo_url: Option<String>,
    /// Optional source repository URL.
    pub source_url: Option<String>,
    /// Whether the project is pinned to the featured row.
    pub featured: bool,
    /// Optional image reference, relative to the asset root.
    pub image: Option<String>,
    /// Ordered outcome highlights shown in the expanded card.
    pub highlights: Vec<String>,
}

impl Project {
    /// Creates a minimal project; optional fields default to empty.
    pub fn new(id: ProjectId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            long_description: None,
            tags: Vec::new(),
            demo_url: None,
            source_url: None,
            featured: false,
            image: None,
            highlights: Vec::new(),
        }
    }

    /// Returns whether this project carries the given tag.
    ///
    /// Comparison is case-insensitive on the query side; stored tags are
    /// already lowercase.
    pub fn has_tag(&self, tag: &str) -> bool {
        let normalized = tag.trim().to_ascii_lowercase();
        self.tags.iter().any(|candidate| candidate == &normalized)
    }
}
