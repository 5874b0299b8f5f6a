use super::*;

fn events(n: usize) -> Vec<ActivityEvent> {
    (0..n)
        .map(|i| ActivityEvent {
            id: format!("e{i}"),
            kind: "PushEvent".into(),
            repo: "me/site".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
        })
        .collect()
}

#[test]
fn full_page_implies_has_more() {
    let mut state = ActivityState::default();
    state.apply_page(1, events(PAGE_SIZE));
    assert!(state.has_more);
    assert_eq!(state.source, ActivitySource::Live);
}

#[test]
fn short_page_implies_no_more() {
    let mut state = ActivityState::default();
    state.apply_page(2, events(3));
    assert!(!state.has_more);
    assert_eq!(state.page, 2);
}

#[test]
fn cache_fallback_clears_error_and_marks_source() {
    let mut state = ActivityState::default();
    state.error = Some("boom".into());
    state.apply_cache(events(4));
    assert_eq!(state.source, ActivitySource::Cache);
    assert!(state.error.is_none());
    assert_eq!(state.events.len(), 4);
}

#[test]
fn error_without_cache_keeps_message() {
    let mut state = ActivityState::default();
    state.apply_error("couldn't load activity".into());
    assert_eq!(state.error.as_deref(), Some("couldn't load activity"));
    assert_eq!(state.source, ActivitySource::None);
}
