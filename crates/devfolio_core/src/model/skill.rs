//! Skill records and the fixed category mapping.

use serde::{Deserialize, Serialize};

/// One skill as rendered by the skills section badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Display name, e.g. `"AWS"`.
    pub name: String,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
    /// Optional icon identifier resolved by the rendering shell.
    pub icon: Option<String>,
    /// Optional one-line blurb shown on hover.
    pub description: Option<String>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
            icon: None,
            description: None,
        }
    }

    /// Returns the categorical band for this entry's numeric level.
    pub fn band(&self) -> SkillBand {
        SkillBand::from_level(self.level)
    }
}

/// Categorical proficiency band derived from the numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillBand {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillBand {
    /// Buckets a numeric level: `<40` beginner, `<60` intermediate,
    /// `<80` advanced, else expert.
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=39 => Self::Beginner,
            40..=59 => Self::Intermediate,
            60..=79 => Self::Advanced,
            _ => Self::Expert,
        }
    }

    /// Screen-reader friendly label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner Level",
            Self::Intermediate => "Intermediate Level",
            Self::Advanced => "Advanced Level",
            Self::Expert => "Expert Level",
        }
    }
}

/// Fixed skill grouping rendered as one tab per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Cloud,
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    /// Stable string id used as the tab name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }

    /// All categories in display order.
    pub fn all() -> [SkillCategory; 4] {
        [Self::Cloud, Self::Frontend, Self::Backend, Self::Tools]
    }
}

/// Skills grouped by the fixed four-category mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub cloud: Vec<SkillEntry>,
    pub frontend: Vec<SkillEntry>,
    pub backend: Vec<SkillEntry>,
    pub tools: Vec<SkillEntry>,
}

impl SkillSet {
    /// Returns entries for one category in source order.
    pub fn category(&self, category: SkillCategory) -> &[SkillEntry] {
        match category {
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Tools => &self.tools,
        }
    }

    /// Iterates all entries across categories in display order.
    pub fn iter_all(&self) -> impl Iterator<Item = &SkillEntry> + '_ {
        self.cloud
            .iter()
            .chain(&self.frontend)
            .chain(&self.backend)
            .chain(&self.tools)
    }
}
