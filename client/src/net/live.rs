//! WebSocket subscription to the live record feed.
//!
//! One-directional: the server pushes [`records::LiveEvent`] frames after
//! every successful mutation and this module folds them into `SiteRecords`.
//! Reconnects with a capped backoff when the socket drops. All of it is
//! gated behind `hydrate` since it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable frames are logged and skipped — one bad frame must not kill
//! the feed, and unknown event kinds from a newer server are expected.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use leptos::prelude::RwSignal;

use crate::state::records::SiteRecords;

/// Fold one raw text frame into the projection. Returns whether the frame
/// was understood (split out from the socket glue for tests).
pub fn apply_frame(site: &mut SiteRecords, raw: &str) -> bool {
    match records::decode_event(raw) {
        Ok(event) => {
            site.apply_event(event);
            true
        }
        Err(_) => false,
    }
}

/// Open the live socket and keep `site` updated until the page goes away.
pub fn connect(site: RwSignal<SiteRecords>) {
    #[cfg(feature = "hydrate")]
    {
        connect_with_backoff(site, 0);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = site;
    }
}

#[cfg(feature = "hydrate")]
const MAX_BACKOFF_MS: u32 = 15_000;

#[cfg(feature = "hydrate")]
fn connect_with_backoff(site: RwSignal<SiteRecords>, attempt: u32) {
    use leptos::prelude::Update;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let scheme = if location.protocol().as_deref() == Ok("https:") { "wss" } else { "ws" };
    let host = location.host().unwrap_or_default();
    let url = format!("{scheme}://{host}/api/live");

    let Ok(socket) = web_sys::WebSocket::new(&url) else {
        schedule_reconnect(site, attempt + 1);
        return;
    };

    let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
        if let Some(text) = ev.data().as_string() {
            site.update(|s| {
                if !apply_frame(s, &text) {
                    log::warn!("live: skipped undecodable frame");
                }
            });
        }
    });
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_close = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(move |_: web_sys::CloseEvent| {
        schedule_reconnect(site, attempt + 1);
    });
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();
}

#[cfg(feature = "hydrate")]
fn schedule_reconnect(site: RwSignal<SiteRecords>, attempt: u32) {
    let delay = (500 * 2_u32.saturating_pow(attempt.min(5))).min(MAX_BACKOFF_MS);
    gloo_timers::callback::Timeout::new(delay, move || connect_with_backoff(site, attempt)).forget();
}
