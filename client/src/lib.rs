//! # client
//!
//! Leptos + WASM frontend for the portfolio site: the page sections, the
//! floating-widget subsystem (registry, window shell, widget panels), the
//! terminal interpreter, and the REST/WebSocket adapters. Integrates with
//! the `arcade` crate for the minigame via the `ArcadePanel` bridge
//! component.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod term;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
