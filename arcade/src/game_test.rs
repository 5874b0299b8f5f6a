use super::*;

fn running_game() -> GameCore {
    let mut core = GameCore::new(400.0, 300.0);
    core.start();
    core
}

// =============================================================================
// Phase machine
// =============================================================================

#[test]
fn new_game_is_ready() {
    let core = GameCore::new(400.0, 300.0);
    assert_eq!(core.phase, Phase::Ready);
    assert_eq!(core.score, 0);
}

#[test]
fn step_before_start_is_idle() {
    let mut core = GameCore::new(400.0, 300.0);
    let before = (core.ball.x, core.ball.y);
    assert_eq!(core.step(), StepOutcome::Idle);
    assert_eq!((core.ball.x, core.ball.y), before);
}

#[test]
fn pause_stops_motion_and_resume_continues() {
    let mut core = running_game();
    core.pause();
    assert_eq!(core.phase, Phase::Paused);
    assert_eq!(core.step(), StepOutcome::Idle);

    core.resume();
    assert_eq!(core.phase, Phase::Running);
    assert_eq!(core.step(), StepOutcome::Moved);
}

#[test]
fn pause_is_noop_when_not_running() {
    let mut core = GameCore::new(400.0, 300.0);
    core.pause();
    assert_eq!(core.phase, Phase::Ready);
}

#[test]
fn reset_clears_score_and_returns_to_ready() {
    let mut core = running_game();
    core.score = 7;
    core.phase = Phase::Ended;
    core.reset();
    assert_eq!(core.phase, Phase::Ready);
    assert_eq!(core.score, 0);
}

// =============================================================================
// Wall reflection
// =============================================================================

#[test]
fn left_wall_reflects_horizontal_velocity() {
    let mut core = running_game();
    core.ball.x = core.ball.radius + 1.0;
    core.ball.y = 100.0;
    core.ball.dx = -5.0;
    core.ball.dy = 0.5;
    core.step();
    assert!(core.ball.dx > 0.0);
    assert!(core.ball.x >= core.ball.radius);
}

#[test]
fn right_wall_reflects_horizontal_velocity() {
    let mut core = running_game();
    core.ball.x = core.width - core.ball.radius - 1.0;
    core.ball.y = 100.0;
    core.ball.dx = 5.0;
    core.ball.dy = 0.5;
    core.step();
    assert!(core.ball.dx < 0.0);
    assert!(core.ball.x + core.ball.radius <= core.width);
}

#[test]
fn top_wall_reflects_vertical_velocity() {
    let mut core = running_game();
    core.ball.x = 200.0;
    core.ball.y = core.ball.radius + 1.0;
    core.ball.dx = 0.0;
    core.ball.dy = -5.0;
    core.step();
    assert!(core.ball.dy > 0.0);
}

// =============================================================================
// Paddle contact
// =============================================================================

#[test]
fn paddle_hit_scales_vertical_speed_by_exact_factor() {
    let mut core = running_game();
    core.paddle.x = 200.0;
    core.ball.x = 200.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 2.0;
    core.ball.dx = 0.0;
    core.ball.dy = 4.0;

    let pre = core.ball.dy.abs();
    assert_eq!(core.step(), StepOutcome::PaddleHit);
    let post = core.ball.dy.abs();
    assert!((post - pre * crate::consts::SPEED_UP_FACTOR).abs() < 1e-9);
    assert!(core.ball.dy < 0.0, "ball must move upward after a hit");
    assert_eq!(core.score, 1);
}

#[test]
fn paddle_hit_deflects_proportionally_to_offset() {
    let mut core = running_game();
    core.paddle.x = 200.0;
    // Strike at half the half-width to the right of center.
    core.ball.x = 200.0 + core.paddle.width / 4.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 2.0;
    core.ball.dx = 0.0;
    core.ball.dy = 4.0;

    core.step();
    assert!((core.ball.dx - crate::consts::DEFLECT_GAIN / 2.0).abs() < 1e-9);
}

#[test]
fn center_hit_has_no_deflection() {
    let mut core = running_game();
    core.paddle.x = 200.0;
    core.ball.x = 200.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 2.0;
    core.ball.dx = 3.0;
    core.ball.dy = 4.0;

    core.step();
    assert!(core.ball.dx.abs() < 1e-9);
}

#[test]
fn miss_ends_the_game_with_final_score() {
    let mut core = running_game();
    core.score = 3;
    core.paddle.x = 60.0;
    core.ball.x = 300.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 1.0;
    core.ball.dx = 0.0;
    core.ball.dy = 4.0;

    assert_eq!(core.step(), StepOutcome::Ended { score: 3 });
    assert_eq!(core.phase, Phase::Ended);
}

#[test]
fn step_after_game_over_does_not_end_again() {
    let mut core = running_game();
    core.paddle.x = 60.0;
    core.ball.x = 300.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 1.0;
    core.ball.dy = 4.0;
    assert!(matches!(core.step(), StepOutcome::Ended { .. }));

    // A second frame evaluation after game-over must not re-trigger the
    // terminal transition (and thus no second score submission).
    assert_eq!(core.step(), StepOutcome::Idle);
    assert_eq!(core.step(), StepOutcome::Idle);
}

#[test]
fn ascending_ball_does_not_interact_with_paddle_line() {
    let mut core = running_game();
    core.paddle.x = 200.0;
    core.ball.x = 200.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 1.0;
    core.ball.dx = 0.0;
    core.ball.dy = -4.0;

    assert_eq!(core.step(), StepOutcome::Moved);
    assert_eq!(core.score, 0);
}

// =============================================================================
// Paddle movement and viewport
// =============================================================================

#[test]
fn move_paddle_clamps_to_canvas() {
    let mut core = running_game();
    core.move_paddle(-10_000.0);
    assert!((core.paddle.x - core.paddle.width / 2.0).abs() < 1e-9);
    core.move_paddle(10_000.0);
    assert!((core.paddle.x - (core.width - core.paddle.width / 2.0)).abs() < 1e-9);
}

#[test]
fn set_viewport_keeps_actors_inside() {
    let mut core = running_game();
    core.ball.x = 390.0;
    core.paddle.x = 350.0;
    core.set_viewport(200.0, 150.0);
    assert!(core.ball.x + core.ball.radius <= 200.0);
    assert!(core.paddle.x + core.paddle.width / 2.0 <= 200.0);
}

#[test]
fn consecutive_hits_compound_the_multiplier() {
    let mut core = running_game();
    core.paddle.x = 200.0;
    core.ball.x = 200.0;
    core.ball.y = core.paddle_line() - core.ball.radius - 2.0;
    core.ball.dx = 0.0;
    core.ball.dy = 4.0;
    core.step();
    let after_first = core.ball.dy.abs();

    // Send it straight back down at the paddle.
    core.ball.y = core.paddle_line() - core.ball.radius - 2.0;
    core.ball.dy = after_first;
    core.ball.x = 200.0;
    core.step();
    let after_second = core.ball.dy.abs();
    assert!((after_second - after_first * crate::consts::SPEED_UP_FACTOR).abs() < 1e-9);
    assert_eq!(core.score, 2);
}
