//! Read-only content source for projects, skills and experience.
//!
//! # Responsibility
//! - Serve the three ordered content sequences plus the site profile.
//! - Provide tag filtering over projects.
//! - Validate externally supplied records for swappable deployments.
//!
//! # Invariants
//! - Sequences preserve source order; no sorting or search exists here.
//! - The bundled catalog is immutable after construction.

mod catalog;

use crate::model::experience::ExperienceEntry;
use crate::model::project::{Project, ProjectId};
use crate::model::skill::SkillSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Filter value meaning "no tag filter".
pub const FILTER_ALL: &str = "all";

pub type ContentResult<T> = Result<T, ContentError>;

/// Validation errors for externally supplied content records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    DuplicateProjectId(ProjectId),
    EmptyField {
        record: String,
        field: &'static str,
    },
    SkillLevelOutOfRange {
        name: String,
        level: u8,
    },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id: {id}"),
            Self::EmptyField { record, field } => {
                write!(f, "record `{record}` has empty required field `{field}`")
            }
            Self::SkillLevelOutOfRange { name, level } => {
                write!(f, "skill `{name}` level {level} exceeds 100")
            }
        }
    }
}

impl Error for ContentError {}

/// Site-wide configuration content (links, titles, contact address).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub site_title: String,
    pub site_description: String,
    pub contact_email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub resume_path: String,
}

/// Read-only content seam.
///
/// The bundled implementation serves static tables; a deployment may swap
/// in a source backed by a file or remote content API loaded at startup.
pub trait ContentSource {
    fn projects(&self) -> &[Project];
    fn skills(&self) -> &SkillSet;
    fn experience(&self) -> &[ExperienceEntry];
    fn profile(&self) -> &SiteProfile;
}

/// In-memory content source over immutable-after-load tables.
#[derive(Debug)]
pub struct StaticContentSource {
    projects: Vec<Project>,
    skills: SkillSet,
    experience: Vec<ExperienceEntry>,
    profile: SiteProfile,
}

impl StaticContentSource {
    /// Content source over the catalog compiled into this binary.
    pub fn bundled() -> Self {
        Self {
            projects: catalog::projects(),
            skills: catalog::skills(),
            experience: catalog::experience(),
            profile: catalog::profile(),
        }
    }

    /// Builds a content source from externally supplied records.
    ///
    /// # Errors
    /// - Duplicate project ids.
    /// - Empty project titles, skill names or experience titles.
    /// - Skill levels above 100.
    pub fn from_records(
        projects: Vec<Project>,
        skills: SkillSet,
        experience: Vec<ExperienceEntry>,
        profile: SiteProfile,
    ) -> ContentResult<Self> {
        let mut seen_ids = BTreeSet::new();
        for project in &projects {
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    record: format!("project {}", project.id),
                    field: "title",
                });
            }
            if !seen_ids.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }

        for entry in skills.iter_all() {
            if entry.name.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    record: "skill".to_string(),
                    field: "name",
                });
            }
            if entry.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: entry.name.clone(),
                    level: entry.level,
                });
            }
        }

        for entry in &experience {
            if entry.title.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    record: format!("experience at {}", entry.organization),
                    field: "title",
                });
            }
        }

        Ok(Self {
            projects,
            skills,
            experience,
            profile,
        })
    }
}

impl ContentSource for StaticContentSource {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn skills(&self) -> &SkillSet {
        &self.skills
    }

    fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    fn profile(&self) -> &SiteProfile {
        &self.profile
    }
}

/// Returns the subsequence of projects carrying `tag`, in source order.
///
/// `"all"` (case-insensitive) returns the full sequence. Unknown tags yield
/// an empty sequence; selection is permissive by contract.
pub fn filter_projects<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    if tag.trim().eq_ignore_ascii_case(FILTER_ALL) {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.has_tag(tag))
        .collect()
}

/// Returns featured projects in source order.
pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|project| project.featured).collect()
}
