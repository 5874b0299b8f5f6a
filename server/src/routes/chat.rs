//! Chat proxy route.
//!
//! ERROR HANDLING
//! ==============
//! Upstream non-2xx statuses are mirrored into the response with a JSON
//! error body; missing configuration is a 503 (a server problem, stated as
//! one); everything unexpected collapses to a generic 500. The provider's
//! error body is logged, never forwarded — it can carry key metadata.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::llm::types::{LlmError, Message};
use crate::services::chat::{ChatServiceError, handle_chat};
use crate::state::AppState;

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Client-generated visitor id for rate limiting. Optional; anonymous
    /// traffic shares one bucket.
    #[serde(default)]
    pub visitor: Option<Uuid>,
    pub messages: Vec<Message>,
}

/// Map a service failure to the externally visible status + body.
fn error_to_response(err: &ChatServiceError) -> (StatusCode, String) {
    match err {
        ChatServiceError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "assistant is not configured".into()),
        ChatServiceError::EmptyTranscript => (StatusCode::UNPROCESSABLE_ENTITY, "transcript is empty".into()),
        ChatServiceError::RateLimited(reason) => (StatusCode::TOO_MANY_REQUESTS, reason.to_string()),
        ChatServiceError::Llm(LlmError::ApiResponse { status, .. }) => {
            let mirrored = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            (mirrored, format!("upstream returned status {status}"))
        }
        ChatServiceError::Llm(_) => (StatusCode::INTERNAL_SERVER_ERROR, "assistant request failed".into()),
    }
}

pub async fn post_chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    let visitor = request.visitor.unwrap_or(Uuid::nil());

    match handle_chat(&state, visitor, &request.messages).await {
        Ok(reply) => Json(json!({ "reply": reply })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "chat: request failed");
            let (status, message) = error_to_response(&e);
            (status, Json(json!({ "error": message }))).into_response()
        }
    }
}
