//! In-memory rate limiting for the chat proxy.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<Uuid, VecDeque<Instant>>`.
//! Two limits enforced:
//! - Per-visitor: 10 chat requests/min
//! - Global: 30 upstream calls/min
//!
//! Visitors identify themselves with a client-generated UUID; an absent or
//! unparseable id falls into one shared bucket, which only tightens the
//! limit for anonymous traffic.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

const DEFAULT_PER_VISITOR_LIMIT: usize = 10;
const DEFAULT_PER_VISITOR_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy)]
struct RateLimitConfig {
    per_visitor_limit: usize,
    per_visitor_window: Duration,
    global_limit: usize,
    global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            per_visitor_limit: env_parse("RATE_LIMIT_PER_VISITOR", DEFAULT_PER_VISITOR_LIMIT),
            per_visitor_window: Duration::from_secs(env_parse(
                "RATE_LIMIT_PER_VISITOR_WINDOW_SECS",
                DEFAULT_PER_VISITOR_WINDOW_SECS,
            )),
            global_limit: env_parse("RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(env_parse("RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    VisitorExceeded { limit: usize, window_secs: u64 },
    #[error("rate limit exceeded (site-wide, max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: std::sync::Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

struct RateLimiterInner {
    /// Per-visitor request timestamps.
    visitor_requests: HashMap<Uuid, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: std::sync::Arc::new(Mutex::new(RateLimiterInner {
                visitor_requests: HashMap::new(),
                global_requests: VecDeque::new(),
            })),
            config: RateLimitConfig::from_env(),
        }
    }

    /// Check both per-visitor and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns a [`RateLimitError`] naming the exhausted window.
    pub fn check_and_record(&self, visitor: Uuid) -> Result<(), RateLimitError> {
        self.check_and_record_at(visitor, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, visitor: Uuid, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        // Prune and check global first (no borrow conflict).
        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        // Prune and check per-visitor.
        let visitor_deque = inner.visitor_requests.entry(visitor).or_default();
        prune_window(visitor_deque, now, cfg.per_visitor_window);
        if visitor_deque.len() >= cfg.per_visitor_limit {
            return Err(RateLimitError::VisitorExceeded {
                limit: cfg.per_visitor_limit,
                window_secs: cfg.per_visitor_window.as_secs(),
            });
        }

        // Record.
        visitor_deque.push_back(now);
        inner.global_requests.push_back(now);

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
