use devfolio_core::view::{DEFAULT_SECTION, INITIAL_REVEAL_COUNT, REVEAL_STEP};
use devfolio_core::{filter_projects, ContentSource, StaticContentSource, ViewState};

#[test]
fn defaults_match_reload_state() {
    let state = ViewState::new();
    assert_eq!(state.active_section(), DEFAULT_SECTION);
    assert_eq!(state.project_filter(), "all");
    assert_eq!(state.visible_count(), INITIAL_REVEAL_COUNT);
    assert_eq!(state.scroll_offset(), 0.0);
}

#[test]
fn selection_is_total_over_arbitrary_names() {
    let mut state = ViewState::new();

    state.select_section("projects");
    assert_eq!(state.active_section(), "projects");

    // Permissive by contract: unknown names are accepted as-is.
    state.select_section("definitely-not-a-section");
    assert_eq!(state.active_section(), "definitely-not-a-section");

    state.select_filter("kubernetes");
    assert_eq!(state.project_filter(), "kubernetes");
}

#[test]
fn reveal_count_never_decreases() {
    let mut state = ViewState::new();
    let before = state.visible_count();

    state.reveal_more(REVEAL_STEP);
    assert_eq!(state.visible_count(), before + REVEAL_STEP);

    state.reveal_more(0);
    assert_eq!(state.visible_count(), before + REVEAL_STEP);

    state.reveal_more(usize::MAX);
    assert_eq!(state.visible_count(), usize::MAX);
}

#[test]
fn visible_slice_caps_at_total_length() {
    let content = StaticContentSource::bundled();
    let all = filter_projects(content.projects(), "all");

    let mut state = ViewState::new();
    assert_eq!(state.visible_slice(&all).len(), INITIAL_REVEAL_COUNT);

    // Advancing far past the total yields the full list, never a panic.
    state.reveal_more(1000);
    assert_eq!(state.visible_slice(&all).len(), all.len());
}

#[test]
fn visible_slice_applies_after_filtering() {
    let content = StaticContentSource::bundled();
    let react = filter_projects(content.projects(), "react");

    let state = ViewState::new();
    assert_eq!(state.visible_slice(&react).len(), react.len().min(INITIAL_REVEAL_COUNT));
}

#[test]
fn scroll_offset_tracks_last_report() {
    let mut state = ViewState::new();
    state.record_scroll(512.5);
    assert_eq!(state.scroll_offset(), 512.5);
    state.record_scroll(12.0);
    assert_eq!(state.scroll_offset(), 12.0);
}
