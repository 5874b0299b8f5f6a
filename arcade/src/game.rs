//! Simulation core — all logic that doesn't depend on the canvas element.
//!
//! One [`GameCore::step`] call advances the world by one animation frame.
//! The phase machine is explicit: the host's frame loop asks for a step and
//! inspects the returned [`StepOutcome`]; a step taken in any phase other
//! than [`Phase::Running`] is a no-op, so a frame that arrives after
//! game-over can never re-trigger the end-of-game transition.

use crate::consts::{
    BALL_RADIUS, DEFLECT_GAIN, PADDLE_HEIGHT, PADDLE_INSET, PADDLE_WIDTH, SERVE_SPEED_X, SERVE_SPEED_Y,
    SPEED_UP_FACTOR,
};

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

/// The ball: center position, per-frame velocity, radius.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
}

/// The paddle: horizontal center position and fixed dimensions. The paddle
/// rides a fixed line near the bottom of the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    /// Whether a horizontal position falls within the paddle's span.
    #[must_use]
    pub fn covers(&self, x: f64) -> bool {
        (x - self.x).abs() <= self.width / 2.0
    }
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the player to serve.
    #[default]
    Ready,
    /// Simulation advancing every frame.
    Running,
    /// Suspended (pointer capture lost); resumable.
    Paused,
    /// The ball passed the paddle line. Terminal until [`GameCore::reset`].
    Ended,
}

/// What a single step did, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Nothing happened (not running).
    Idle,
    /// The ball moved; redraw needed.
    Moved,
    /// The ball bounced off the paddle; score increased.
    PaddleHit,
    /// The ball passed the paddle line. Emitted exactly once per session.
    Ended { score: u32 },
}

/// The full game state inside a canvas of dynamic size.
#[derive(Debug, Clone)]
pub struct GameCore {
    pub width: f64,
    pub height: f64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub phase: Phase,
    pub score: u32,
}

impl GameCore {
    /// Create a fresh game inside the given canvas dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut core = Self {
            width,
            height,
            ball: Ball { x: 0.0, y: 0.0, dx: 0.0, dy: 0.0, radius: BALL_RADIUS },
            paddle: Paddle { x: width / 2.0, width: PADDLE_WIDTH, height: PADDLE_HEIGHT },
            phase: Phase::Ready,
            score: 0,
        };
        core.place_serve();
        core
    }

    /// The vertical coordinate of the paddle line.
    #[must_use]
    pub fn paddle_line(&self) -> f64 {
        self.height - PADDLE_INSET
    }

    fn place_serve(&mut self) {
        self.ball.x = self.width / 2.0;
        self.ball.y = self.height / 3.0;
        self.ball.dx = SERVE_SPEED_X;
        self.ball.dy = SERVE_SPEED_Y;
    }

    /// Serve the ball. Only meaningful from [`Phase::Ready`].
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
    }

    /// Suspend the simulation (pointer capture lost). No-op unless running.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Resume after a pause. No-op unless paused.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Return to a fresh [`Phase::Ready`] session, clearing the score.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = Phase::Ready;
        self.paddle.x = self.width / 2.0;
        self.place_serve();
    }

    /// Move the paddle by a relative horizontal delta, clamped to the canvas.
    pub fn move_paddle(&mut self, dx: f64) {
        let half = self.paddle.width / 2.0;
        self.paddle.x = (self.paddle.x + dx).clamp(half, self.width - half);
    }

    /// Adopt new canvas dimensions, keeping ball and paddle inside.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        let half = self.paddle.width / 2.0;
        self.paddle.x = self.paddle.x.clamp(half, (self.width - half).max(half));
        self.ball.x = self.ball.x.clamp(self.ball.radius, (self.width - self.ball.radius).max(self.ball.radius));
        self.ball.y = self.ball.y.clamp(self.ball.radius, (self.height - self.ball.radius).max(self.ball.radius));
    }

    /// Advance the simulation by one frame.
    ///
    /// Wall contacts reflect the velocity; reaching the paddle line either
    /// bounces (inside the paddle span: vertical speed scaled by
    /// [`SPEED_UP_FACTOR`], horizontal deflection proportional to the offset
    /// from paddle center) or ends the game.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Running {
            return StepOutcome::Idle;
        }

        let line = self.paddle_line();
        let ball = &mut self.ball;
        ball.x += ball.dx;
        ball.y += ball.dy;

        // Side walls.
        if ball.x - ball.radius <= 0.0 {
            ball.x = ball.radius;
            ball.dx = ball.dx.abs();
        } else if ball.x + ball.radius >= self.width {
            ball.x = self.width - ball.radius;
            ball.dx = -ball.dx.abs();
        }

        // Top wall.
        if ball.y - ball.radius <= 0.0 {
            ball.y = ball.radius;
            ball.dy = ball.dy.abs();
        }

        // Paddle line, only while descending.
        if ball.dy > 0.0 && ball.y + ball.radius >= line {
            if self.paddle.covers(ball.x) {
                ball.y = line - ball.radius;
                ball.dy = -(ball.dy.abs() * SPEED_UP_FACTOR);
                let offset = (ball.x - self.paddle.x) / (self.paddle.width / 2.0);
                ball.dx = offset * DEFLECT_GAIN;
                self.score += 1;
                return StepOutcome::PaddleHit;
            }
            self.phase = Phase::Ended;
            return StepOutcome::Ended { score: self.score };
        }

        StepOutcome::Moved
    }
}
