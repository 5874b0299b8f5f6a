//! Client-side wire types for third-party and proxy responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::activity::ActivityEvent;

/// One event as the public GitHub events API returns it (the fields we use).
#[derive(Debug, Clone, Deserialize)]
pub struct GithubEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: GithubRepo,
    pub created_at: String,
}

/// Repo reference embedded in a GitHub event.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
}

/// Flatten a raw GitHub events response body into display events.
///
/// # Errors
///
/// Returns a short description when the body is not the expected shape.
pub fn flatten_events(raw: &str) -> Result<Vec<ActivityEvent>, String> {
    let events: Vec<GithubEvent> = serde_json::from_str(raw).map_err(|e| format!("unexpected response: {e}"))?;
    Ok(events
        .into_iter()
        .map(|e| ActivityEvent { id: e.id, kind: e.kind, repo: e.repo.name, created_at: e.created_at })
        .collect())
}

/// Extract a contribution total from the public heatmap API response, which
/// nests totals under arbitrary year keys. Lenient: any numeric leaf under
/// `total` is summed.
#[must_use]
pub fn contribution_total(raw: &str) -> Option<i64> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let totals = value.get("total")?.as_object()?;
    Some(totals.values().filter_map(serde_json::Value::as_i64).sum())
}

/// Normalized coding-time stats as `/api/stats/coding` returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingStats {
    pub total_hours: f64,
    pub daily_average_hours: f64,
    #[serde(default)]
    pub top_language: Option<String>,
}

/// Acknowledgement from the contact endpoint. `warning` is set when the
/// message was stored but the notification email could not be sent.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactAck {
    pub ok: bool,
    #[serde(default)]
    pub warning: Option<String>,
}
