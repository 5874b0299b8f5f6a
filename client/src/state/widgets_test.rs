use super::*;

// =============================================================================
// Toggle cycle
// =============================================================================

#[test]
fn toggle_from_closed_opens_active() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    assert!(reg.is_open(WidgetId::Chat));
    assert!(!reg.is_minimized(WidgetId::Chat));
}

#[test]
fn toggle_three_times_returns_to_open_active() {
    // closed → open-active → open-minimized → open-active, for every widget.
    for id in WidgetId::ALL {
        let mut reg = WidgetRegistry::default();
        reg.toggle(id);
        assert!(reg.is_open(id) && !reg.is_minimized(id));
        reg.toggle(id);
        assert!(reg.is_open(id) && reg.is_minimized(id));
        reg.toggle(id);
        assert!(reg.is_open(id) && !reg.is_minimized(id));
    }
}

#[test]
fn toggle_does_not_duplicate_open_entries() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Terminal);
    reg.toggle(WidgetId::Terminal);
    reg.toggle(WidgetId::Terminal);
    assert_eq!(reg.stacking_order(), &[WidgetId::Terminal]);
}

// =============================================================================
// Close
// =============================================================================

#[test]
fn close_from_any_state_yields_closed() {
    for cycles in 0..3 {
        let mut reg = WidgetRegistry::default();
        for _ in 0..=cycles {
            reg.toggle(WidgetId::Arcade);
        }
        reg.close(WidgetId::Arcade);
        assert!(!reg.is_open(WidgetId::Arcade));
        assert!(!reg.is_minimized(WidgetId::Arcade));
    }
}

#[test]
fn close_on_closed_widget_is_noop() {
    let mut reg = WidgetRegistry::default();
    reg.close(WidgetId::Chat);
    assert!(!reg.is_open(WidgetId::Chat));
}

#[test]
fn reopening_after_close_starts_active() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    reg.toggle(WidgetId::Chat); // minimized
    reg.close(WidgetId::Chat);
    reg.toggle(WidgetId::Chat);
    assert!(reg.is_open(WidgetId::Chat));
    assert!(!reg.is_minimized(WidgetId::Chat), "stale minimized flag survived a close");
}

// =============================================================================
// Minimize
// =============================================================================

#[test]
fn minimize_requires_open() {
    let mut reg = WidgetRegistry::default();
    reg.minimize(WidgetId::Terminal);
    assert!(!reg.is_minimized(WidgetId::Terminal));
}

#[test]
fn minimize_is_idempotent() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Terminal);
    reg.minimize(WidgetId::Terminal);
    reg.minimize(WidgetId::Terminal);
    assert!(reg.is_minimized(WidgetId::Terminal));
    // A single restore toggle must fully clear it.
    reg.toggle(WidgetId::Terminal);
    assert!(!reg.is_minimized(WidgetId::Terminal));
}

// =============================================================================
// Stacking order
// =============================================================================

#[test]
fn open_order_is_stacking_order() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    reg.toggle(WidgetId::Terminal);
    reg.toggle(WidgetId::Arcade);
    assert_eq!(reg.stacking_order(), &[WidgetId::Chat, WidgetId::Terminal, WidgetId::Arcade]);
    assert_eq!(reg.stack_index(WidgetId::Chat), Some(0));
    assert_eq!(reg.stack_index(WidgetId::SkillMap), None);
}

#[test]
fn raise_moves_widget_to_top() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    reg.toggle(WidgetId::Terminal);
    reg.raise(WidgetId::Chat);
    assert_eq!(reg.stacking_order(), &[WidgetId::Terminal, WidgetId::Chat]);
}

#[test]
fn raise_on_closed_widget_is_noop() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    reg.raise(WidgetId::Arcade);
    assert_eq!(reg.stacking_order(), &[WidgetId::Chat]);
}

#[test]
fn minimize_preserves_stack_position() {
    let mut reg = WidgetRegistry::default();
    reg.toggle(WidgetId::Chat);
    reg.toggle(WidgetId::Terminal);
    reg.minimize(WidgetId::Chat);
    // Minimizing hides the window but does not reorder the open set.
    assert_eq!(reg.stacking_order(), &[WidgetId::Chat, WidgetId::Terminal]);
}
