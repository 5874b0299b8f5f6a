//! Shared numeric constants for the arcade crate.

// ── Geometry ────────────────────────────────────────────────────

/// Ball radius in CSS pixels.
pub const BALL_RADIUS: f64 = 8.0;

/// Paddle width in CSS pixels.
pub const PADDLE_WIDTH: f64 = 96.0;

/// Paddle height in CSS pixels.
pub const PADDLE_HEIGHT: f64 = 14.0;

/// Distance from the bottom edge of the canvas to the paddle line.
pub const PADDLE_INSET: f64 = 28.0;

// ── Motion ──────────────────────────────────────────────────────

/// Horizontal speed of a fresh serve, pixels per frame.
pub const SERVE_SPEED_X: f64 = 2.5;

/// Vertical speed of a fresh serve, pixels per frame.
pub const SERVE_SPEED_Y: f64 = 4.0;

/// Multiplier applied to the ball's vertical speed on every paddle hit.
pub const SPEED_UP_FACTOR: f64 = 1.05;

/// Horizontal speed at the paddle edge after a deflection; the deflection
/// scales linearly with the hit offset from the paddle center.
pub const DEFLECT_GAIN: f64 = 6.0;

/// Multiplier from raw pointer-lock movement to paddle displacement.
pub const POINTER_SENSITIVITY: f64 = 1.0;
