//! Coding-time stats proxy.
//!
//! Forwards to the WakaTime-style stats API with the server-side key and
//! normalizes the response down to the three figures the client renders.
//! Upstream non-2xx statuses are mirrored; a missing key is a 503.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::{AppState, WakatimeConfig};

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

/// Normalized stats payload. Field names are the client's contract.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct CodingStats {
    pub total_hours: f64,
    pub daily_average_hours: f64,
    pub top_language: Option<String>,
}

/// Reduce the upstream stats body to the normalized shape.
///
/// # Errors
///
/// Returns a short description when the body is not the expected shape.
pub fn normalize_stats(raw: &str) -> Result<CodingStats, String> {
    #[derive(serde::Deserialize)]
    struct Upstream {
        data: UpstreamData,
    }
    #[derive(serde::Deserialize)]
    struct UpstreamData {
        #[serde(default)]
        total_seconds: f64,
        #[serde(default)]
        daily_average: f64,
        #[serde(default)]
        languages: Vec<UpstreamLanguage>,
    }
    #[derive(serde::Deserialize)]
    struct UpstreamLanguage {
        name: String,
    }

    let upstream: Upstream = serde_json::from_str(raw).map_err(|e| format!("unexpected stats shape: {e}"))?;
    Ok(CodingStats {
        total_hours: upstream.data.total_seconds / 3600.0,
        daily_average_hours: upstream.data.daily_average / 3600.0,
        top_language: upstream.data.languages.into_iter().next().map(|l| l.name),
    })
}

async fn fetch_upstream(config: &WakatimeConfig) -> Result<(u16, String), String> {
    let url = format!(
        "{}/users/{}/stats/last_30_days?api_key={}",
        config.base_url, config.user, config.api_key
    );
    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok((status, body))
}

pub async fn coding_stats(State(state): State<AppState>) -> Response {
    let Some(config) = &state.wakatime else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "coding stats are not configured" })),
        )
            .into_response();
    };

    match fetch_upstream(config).await {
        Ok((200, body)) => match normalize_stats(&body) {
            Ok(stats) => Json(stats).into_response(),
            Err(reason) => {
                tracing::error!(%reason, "stats: upstream body did not normalize");
                (StatusCode::BAD_GATEWAY, Json(json!({ "error": "unexpected upstream response" }))).into_response()
            }
        },
        Ok((status, _)) => {
            let mirrored = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (mirrored, Json(json!({ "error": format!("upstream returned status {status}") }))).into_response()
        }
        Err(reason) => {
            tracing::error!(%reason, "stats: upstream request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "stats request failed" }))).into_response()
        }
    }
}
