//! Stale-cache fallback for the activity feed.
//!
//! The last successful fetch is kept in `localStorage` with its timestamp.
//! When a refetch fails, a cache entry younger than the freshness window is
//! served instead of an error; an error is only shown when there is nothing
//! usable to fall back on. The decision is a pure function over the fetch
//! result, the cache entry, and the clock.

#[cfg(test)]
#[path = "activity_cache_test.rs"]
mod activity_cache_test;

use serde::{Deserialize, Serialize};

use crate::state::activity::ActivityEvent;
use crate::util::storage;

const CACHE_KEY: &str = "activity_cache";
/// Freshness window: five minutes.
pub const FRESH_WINDOW_MS: f64 = 5.0 * 60.0 * 1000.0;

/// A cached fetch: the events plus when they were fetched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedEvents {
    pub fetched_at_ms: f64,
    pub events: Vec<ActivityEvent>,
}

/// What the panel should display after a fetch attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The fetch succeeded; show it (and it has been cached).
    Live(Vec<ActivityEvent>),
    /// The fetch failed but a fresh-enough cache exists; show that, no error.
    Stale(Vec<ActivityEvent>),
    /// The fetch failed and no usable cache exists; show the error.
    Failed(String),
}

/// Decide what to display. Pure; storage I/O stays in [`load`]/[`store`].
#[must_use]
pub fn resolve(
    fetched: Result<Vec<ActivityEvent>, String>,
    cache: Option<CachedEvents>,
    now_ms: f64,
) -> Resolution {
    match fetched {
        Ok(events) => Resolution::Live(events),
        Err(error) => match cache {
            Some(entry) if now_ms - entry.fetched_at_ms <= FRESH_WINDOW_MS => Resolution::Stale(entry.events),
            _ => Resolution::Failed(error),
        },
    }
}

/// Load the cached fetch, if any.
#[must_use]
pub fn load() -> Option<CachedEvents> {
    storage::load_json(CACHE_KEY)
}

/// Record a successful fetch.
pub fn store(events: &[ActivityEvent], now_ms: f64) {
    storage::save_json(CACHE_KEY, &CachedEvents { fetched_at_ms: now_ms, events: events.to_vec() });
}
