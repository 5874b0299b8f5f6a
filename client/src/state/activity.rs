//! State for the GitHub activity viewer widget.
//!
//! Pagination is client-driven: the panel fetches one page at a time and
//! infers "has more" from whether the last page came back full. The last
//! successful fetch is cached in localStorage (see `util::activity_cache`)
//! and served when a refetch fails.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use serde::{Deserialize, Serialize};

/// Events shown per page.
pub const PAGE_SIZE: usize = 10;

/// One public activity event, already flattened from the upstream shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: String,
    pub kind: String,
    pub repo: String,
    pub created_at: String,
}

/// Where the currently displayed events came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivitySource {
    #[default]
    None,
    Live,
    /// Served from the local cache after a failed refetch.
    Cache,
}

/// State for the activity panel.
#[derive(Clone, Debug, Default)]
pub struct ActivityState {
    pub events: Vec<ActivityEvent>,
    pub page: usize,
    pub has_more: bool,
    pub source: ActivitySource,
    pub error: Option<String>,
    pub loading: bool,
    /// Contribution total fetched from the public heatmap API, if available.
    pub contributions: Option<i64>,
}

impl ActivityState {
    /// Adopt a freshly fetched page.
    pub fn apply_page(&mut self, page: usize, events: Vec<ActivityEvent>) {
        self.has_more = events.len() == PAGE_SIZE;
        self.events = events;
        self.page = page;
        self.source = ActivitySource::Live;
        self.error = None;
        self.loading = false;
    }

    /// Fall back to cached events after a failed refetch.
    pub fn apply_cache(&mut self, events: Vec<ActivityEvent>) {
        self.has_more = false;
        self.events = events;
        self.page = 1;
        self.source = ActivitySource::Cache;
        self.error = None;
        self.loading = false;
    }

    /// Record a fetch failure with nothing to fall back on.
    pub fn apply_error(&mut self, message: String) {
        self.source = ActivitySource::None;
        self.error = Some(message);
        self.loading = false;
    }
}
