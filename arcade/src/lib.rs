//! Paddle-and-ball minigame engine for the portfolio arcade widget.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The
//! simulation itself is pure Rust with no DOM dependencies so it can be
//! tested natively; the browser glue (canvas element, 2D context) lives in
//! the thin [`engine::Engine`] wrapper. The host component is responsible
//! for driving one [`game::GameCore::step`] per animation frame and for
//! submitting the final score when a game ends.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`game`] | The simulation core: ball, paddle, walls, game phases |
//! | [`input`] | Pointer-lock movement mapping and capture-loss handling |
//! | [`engine`] | Browser wrapper owning the canvas element |
//! | [`render`] | Scene drawing on the 2D context |
//! | [`consts`] | Shared numeric constants (sizes, speeds, the hit multiplier) |

pub mod consts;
pub mod engine;
pub mod game;
pub mod input;
pub mod render;
