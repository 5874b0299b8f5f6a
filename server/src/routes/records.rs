//! REST handlers for the record collections.
//!
//! Handlers are thin: delegate to the records service, map [`StoreError`]
//! to a status + JSON error body, and broadcast a [`LiveEvent`] to the live
//! feed after every successful mutation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use records::{
    Comment, ContactMessage, CounterValue, GameScore, GuestbookEntry, LiveEvent, NewComment, NewGuestbookEntry,
    NewScore, NewTestimonial, Testimonial,
};

use crate::services::contact;
use crate::services::records::{self as store, StoreError};
use crate::state::AppState;

fn error_response(err: &StoreError) -> Response {
    let status = match err {
        StoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "records: store failure");
        return (status, Json(json!({ "error": "storage failure" }))).into_response();
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

// =============================================================================
// COMMENTS
// =============================================================================

pub async fn list_comments(State(state): State<AppState>) -> Response {
    match store::list_comments(&state.pool).await {
        Ok(comments) => Json::<Vec<Comment>>(comments).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn create_comment(State(state): State<AppState>, Json(input): Json<NewComment>) -> Response {
    match store::create_comment(&state.pool, &input).await {
        Ok(comment) => {
            state
                .broadcast(&LiveEvent::CommentAdded { comment: comment.clone() })
                .await;
            (StatusCode::CREATED, Json(comment)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

pub async fn like_comment(State(state): State<AppState>, Path(id): Path<uuid::Uuid>) -> Response {
    match store::like_comment(&state.pool, id).await {
        Ok(likes) => {
            state.broadcast(&LiveEvent::CommentLiked { id, likes }).await;
            Json(json!({ "likes": likes })).into_response()
        }
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// GUESTBOOK
// =============================================================================

pub async fn list_guestbook(State(state): State<AppState>) -> Response {
    match store::list_guestbook(&state.pool).await {
        Ok(entries) => Json::<Vec<GuestbookEntry>>(entries).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn create_guestbook_entry(State(state): State<AppState>, Json(input): Json<NewGuestbookEntry>) -> Response {
    match store::create_guestbook_entry(&state.pool, &input).await {
        Ok(entry) => {
            state
                .broadcast(&LiveEvent::GuestbookAdded { entry: entry.clone() })
                .await;
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

pub async fn list_testimonials(State(state): State<AppState>) -> Response {
    match store::list_testimonials(&state.pool).await {
        Ok(testimonials) => Json::<Vec<Testimonial>>(testimonials).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn create_testimonial(State(state): State<AppState>, Json(input): Json<NewTestimonial>) -> Response {
    match store::create_testimonial(&state.pool, &input).await {
        Ok(testimonial) => {
            state
                .broadcast(&LiveEvent::TestimonialAdded { testimonial: testimonial.clone() })
                .await;
            (StatusCode::CREATED, Json(testimonial)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// CONTACT
// =============================================================================

pub async fn submit_contact(State(state): State<AppState>, Json(input): Json<ContactMessage>) -> Response {
    match contact::submit(&state, &input).await {
        Ok(outcome) => Json(json!({ "ok": true, "warning": outcome.warning })).into_response(),
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// SCORES
// =============================================================================

pub async fn list_scores(State(state): State<AppState>) -> Response {
    match store::top_scores(&state.pool).await {
        Ok(scores) => Json::<Vec<GameScore>>(scores).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn submit_score(State(state): State<AppState>, Json(input): Json<NewScore>) -> Response {
    match store::create_score(&state.pool, &input).await {
        Ok(score) => {
            state
                .broadcast(&LiveEvent::ScoreAdded { score: score.clone() })
                .await;
            (StatusCode::CREATED, Json(score)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// COUNTERS
// =============================================================================

pub async fn get_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match store::get_counter(&state.pool, &name).await {
        Ok(value) => Json(json!({ "name": name, "value": value })).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn hit_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match store::increment_counter(&state.pool, &name).await {
        Ok(value) => {
            state
                .broadcast(&LiveEvent::CounterChanged { counter: CounterValue { name: name.clone(), value } })
                .await;
            Json(json!({ "name": name, "value": value })).into_response()
        }
        Err(e) => error_response(&e),
    }
}
