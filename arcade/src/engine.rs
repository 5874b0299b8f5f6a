//! Browser wrapper — owns the canvas element and delegates to [`GameCore`].

use web_sys::HtmlCanvasElement;

use crate::game::{GameCore, StepOutcome};
use crate::input::{self, Capture};
use crate::render;

/// The full engine. Wraps [`GameCore`] and the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: GameCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sized to the
    /// element's current backing dimensions.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = GameCore::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Self { canvas, core }
    }

    /// Advance one frame and redraw. The host frame loop inspects the
    /// outcome to decide whether to reschedule and whether the session
    /// ended.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.core.step();
        self.render();
        outcome
    }

    /// Relative pointer motion while captured.
    pub fn pointer_moved(&mut self, movement_x: f64) {
        input::apply_movement(&mut self.core, movement_x);
    }

    /// Pointer-lock state change from the document.
    pub fn capture_changed(&mut self, capture: Capture) {
        input::apply_capture_change(&mut self.core, capture);
    }

    /// Adopt the canvas element's current dimensions.
    pub fn sync_viewport(&mut self) {
        self.core.set_viewport(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    /// Draw the current state to the canvas.
    pub fn render(&self) {
        render::draw(&self.canvas, &self.core);
    }
}
