//! Transient UI selection state.
//!
//! # Responsibility
//! - Hold the active section, project filter, reveal count and scroll
//!   offset for one page session.
//!
//! # Invariants
//! - Nothing here persists; `ViewState::default()` is the reload state.
//! - The reveal count never decreases.
//! - Selection is total over arbitrary names; unknown values are accepted
//!   as-is by contract.

use crate::content::FILTER_ALL;

/// Section shown on first load.
pub const DEFAULT_SECTION: &str = "home";
/// Projects revealed before the first "load more" interaction.
pub const INITIAL_REVEAL_COUNT: usize = 6;
/// Projects added per "load more" interaction.
pub const REVEAL_STEP: usize = 3;

/// Per-session view state with no cross-session meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active_section: String,
    project_filter: String,
    visible_count: usize,
    scroll_offset: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: DEFAULT_SECTION.to_string(),
            project_filter: FILTER_ALL.to_string(),
            visible_count: INITIAL_REVEAL_COUNT,
            scroll_offset: 0.0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn project_filter(&self) -> &str {
        &self.project_filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Activates a section or tab by name.
    ///
    /// Total over caller-supplied names; no validation against the known
    /// set happens here.
    pub fn select_section(&mut self, name: impl Into<String>) {
        self.active_section = name.into();
    }

    /// Activates a project tag filter; same permissive contract as
    /// [`ViewState::select_section`]. Filtering an unknown tag simply
    /// yields an empty gallery.
    pub fn select_filter(&mut self, tag: impl Into<String>) {
        self.project_filter = tag.into();
    }

    /// Advances the reveal count; saturating, never decreasing.
    pub fn reveal_more(&mut self, step: usize) {
        self.visible_count = self.visible_count.saturating_add(step);
    }

    /// Caps a list at the current reveal count.
    ///
    /// A count past the list length yields the full list, never a panic.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible_count)]
    }

    /// Records the last reported scroll offset.
    pub fn record_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }
}
