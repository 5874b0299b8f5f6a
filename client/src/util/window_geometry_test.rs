use super::*;

fn anchor(px: f64, py: f64, a: f64, b: f64) -> Anchor {
    Anchor { pointer_x: px, pointer_y: py, start_a: a, start_b: b }
}

// =============================================================================
// Drag
// =============================================================================

#[test]
fn drag_follows_pointer_delta() {
    let a = anchor(100.0, 100.0, 50.0, 60.0);
    assert_eq!(drag_position(a, 110.0, 95.0), (60.0, 55.0));
}

#[test]
fn drag_may_leave_the_viewport() {
    let a = anchor(10.0, 10.0, 0.0, 0.0);
    let (x, y) = drag_position(a, -500.0, -500.0);
    assert!(x < 0.0 && y < 0.0);
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn resize_grows_with_pointer_delta() {
    let a = anchor(400.0, 300.0, 320.0, 240.0);
    assert_eq!(resize_size(a, 450.0, 340.0), (370.0, 280.0));
}

#[test]
fn resize_clamps_to_minimum_per_axis() {
    let a = anchor(400.0, 300.0, 320.0, 240.0);
    // Pull far up-left: both axes clamp.
    assert_eq!(resize_size(a, 0.0, 0.0), (MIN_WIDTH, MIN_HEIGHT));
    // Pull left only: width clamps, height still tracks.
    let (w, h) = resize_size(a, 0.0, 360.0);
    assert_eq!(w, MIN_WIDTH);
    assert_eq!(h, 300.0);
}

// =============================================================================
// Initial placement
// =============================================================================

#[test]
fn initial_rects_cascade_by_slot() {
    let first = initial_rect(0, 420.0, 320.0);
    let second = initial_rect(1, 420.0, 320.0);
    assert!(second.x > first.x && second.y > first.y);
    assert_eq!(first.width, 420.0);
}

#[test]
fn initial_rect_cascade_wraps() {
    assert_eq!(initial_rect(0, 400.0, 300.0), initial_rect(6, 400.0, 300.0));
}
