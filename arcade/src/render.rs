//! Scene drawing on the canvas 2D context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::game::{GameCore, Phase};

const BACKGROUND: &str = "#0b0f14";
const FOREGROUND: &str = "#7ef9a2";
const DIM: &str = "#3c5648";

/// Draw the full scene. Silently does nothing if the 2D context is
/// unavailable (e.g. during teardown).
pub fn draw(canvas: &HtmlCanvasElement, core: &GameCore) {
    let Some(ctx) = context(canvas) else {
        return;
    };

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, core.width, core.height);

    // Paddle.
    ctx.set_fill_style_str(FOREGROUND);
    ctx.fill_rect(
        core.paddle.x - core.paddle.width / 2.0,
        core.paddle_line(),
        core.paddle.width,
        core.paddle.height,
    );

    // Ball.
    ctx.begin_path();
    let _ = ctx.arc(core.ball.x, core.ball.y, core.ball.radius, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Score.
    ctx.set_font("16px monospace");
    let _ = ctx.fill_text(&format!("score {}", core.score), 12.0, 24.0);

    match core.phase {
        Phase::Ready => overlay(&ctx, core, "click to serve"),
        Phase::Paused => overlay(&ctx, core, "paused — click to resume"),
        Phase::Ended => overlay(&ctx, core, "game over"),
        Phase::Running => {}
    }
}

fn overlay(ctx: &CanvasRenderingContext2d, core: &GameCore, text: &str) {
    ctx.set_fill_style_str(DIM);
    ctx.set_font("20px monospace");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(text, core.width / 2.0, core.height / 2.0);
    ctx.set_text_align("start");
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}
