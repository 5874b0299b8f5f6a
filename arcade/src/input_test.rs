use super::*;
use crate::game::Phase;

#[test]
fn paddle_delta_scales_by_sensitivity() {
    assert!((paddle_delta(10.0) - 10.0 * crate::consts::POINTER_SENSITIVITY).abs() < 1e-9);
}

#[test]
fn losing_capture_pauses_a_running_game() {
    let mut core = GameCore::new(400.0, 300.0);
    core.start();
    apply_capture_change(&mut core, Capture::Released);
    assert_eq!(core.phase, Phase::Paused);
}

#[test]
fn losing_capture_leaves_ready_game_alone() {
    let mut core = GameCore::new(400.0, 300.0);
    apply_capture_change(&mut core, Capture::Released);
    assert_eq!(core.phase, Phase::Ready);
}

#[test]
fn regaining_capture_does_not_auto_resume() {
    let mut core = GameCore::new(400.0, 300.0);
    core.start();
    core.pause();
    apply_capture_change(&mut core, Capture::Locked);
    assert_eq!(core.phase, Phase::Paused);
}

#[test]
fn movement_moves_the_paddle_while_running() {
    let mut core = GameCore::new(400.0, 300.0);
    core.start();
    let before = core.paddle.x;
    apply_movement(&mut core, 24.0);
    assert!((core.paddle.x - before - 24.0 * crate::consts::POINTER_SENSITIVITY).abs() < 1e-9);
}

#[test]
fn movement_is_ignored_after_game_over() {
    let mut core = GameCore::new(400.0, 300.0);
    core.phase = Phase::Ended;
    let before = core.paddle.x;
    apply_movement(&mut core, 24.0);
    assert!((core.paddle.x - before).abs() < 1e-9);
}
