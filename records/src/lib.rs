//! Shared record model and live-event codec for the portfolio site.
//!
//! This crate owns the data types used by both `server` and `client`:
//! visitor-submitted records (comments, guestbook entries, testimonials,
//! game scores, contact messages), site counters, input validation, and the
//! [`LiveEvent`] frames pushed over the live WebSocket feed. Events are
//! encoded as JSON text frames; the payloads are small enough that a binary
//! codec has nothing to win here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Maximum length accepted for short author/name fields.
pub const MAX_NAME_LEN: usize = 120;
/// Maximum length accepted for free-text bodies.
pub const MAX_BODY_LEN: usize = 4000;

// =============================================================================
// ERRORS
// =============================================================================

/// Validation failure for a visitor submission. The message is shown to the
/// visitor verbatim, so variants carry human-readable context.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    Missing(&'static str),
    /// A field exceeded its maximum length.
    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
    /// The email field does not look like an address.
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame could not be decoded as a [`LiveEvent`].
    #[error("failed to decode live event: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// RECORDS
// =============================================================================

/// A visitor comment. `likes` is maintained by atomic increments on the
/// store; clients never compute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub likes: i64,
    /// Server-assigned creation time, epoch milliseconds.
    pub created_at_ms: f64,
}

/// A guestbook entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub id: Uuid,
    pub author: String,
    pub message: String,
    pub created_at_ms: f64,
}

/// A testimonial with the author's role/affiliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub author: String,
    pub role: String,
    pub message: String,
    pub created_at_ms: f64,
}

/// A submitted arcade score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScore {
    pub id: Uuid,
    pub player: String,
    pub score: i64,
    pub created_at_ms: f64,
}

/// A named site counter (views, likes, clicks) and its current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterValue {
    pub name: String,
    pub value: i64,
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Input payload for a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// Input payload for a new guestbook entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuestbookEntry {
    pub author: String,
    pub message: String,
}

/// Input payload for a new testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub author: String,
    pub role: String,
    pub message: String,
}

/// Input payload for an arcade score submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScore {
    pub player: String,
    pub score: i64,
}

/// Input payload for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(())
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Normalize an email address: trim, lowercase, and require a single `@`
/// with non-empty local and domain parts. Returns `None` when malformed.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validate a comment submission.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_comment(input: &NewComment) -> Result<(), ValidationError> {
    require("name", &input.author)?;
    bounded("name", &input.author, MAX_NAME_LEN)?;
    require("comment", &input.body)?;
    bounded("comment", &input.body, MAX_BODY_LEN)?;
    Ok(())
}

/// Validate a guestbook submission.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_guestbook(input: &NewGuestbookEntry) -> Result<(), ValidationError> {
    require("name", &input.author)?;
    bounded("name", &input.author, MAX_NAME_LEN)?;
    require("message", &input.message)?;
    bounded("message", &input.message, MAX_BODY_LEN)?;
    Ok(())
}

/// Validate a testimonial submission.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_testimonial(input: &NewTestimonial) -> Result<(), ValidationError> {
    require("name", &input.author)?;
    bounded("name", &input.author, MAX_NAME_LEN)?;
    require("role", &input.role)?;
    bounded("role", &input.role, MAX_NAME_LEN)?;
    require("message", &input.message)?;
    bounded("message", &input.message, MAX_BODY_LEN)?;
    Ok(())
}

/// Validate a score submission. Negative scores are rejected as missing —
/// the arcade never produces them.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_score(input: &NewScore) -> Result<(), ValidationError> {
    require("player", &input.player)?;
    bounded("player", &input.player, MAX_NAME_LEN)?;
    if input.score < 0 {
        return Err(ValidationError::Missing("score"));
    }
    Ok(())
}

/// Validate a contact submission. All three fields are required; the email
/// must normalize.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_contact(input: &ContactMessage) -> Result<(), ValidationError> {
    require("name", &input.name)?;
    bounded("name", &input.name, MAX_NAME_LEN)?;
    require("email", &input.email)?;
    if normalize_email(&input.email).is_none() {
        return Err(ValidationError::InvalidEmail);
    }
    require("message", &input.message)?;
    bounded("message", &input.message, MAX_BODY_LEN)?;
    Ok(())
}

// =============================================================================
// LIVE EVENTS
// =============================================================================

/// A change pushed to every live subscriber after a successful mutation.
///
/// Tagged by `kind` on the wire so unknown future kinds can be skipped by
/// old clients instead of failing the whole feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiveEvent {
    CommentAdded { comment: Comment },
    CommentLiked { id: Uuid, likes: i64 },
    GuestbookAdded { entry: GuestbookEntry },
    TestimonialAdded { testimonial: Testimonial },
    ScoreAdded { score: GameScore },
    CounterChanged { counter: CounterValue },
}

/// Encode a live event as a JSON text frame.
#[must_use]
pub fn encode_event(event: &LiveEvent) -> String {
    // LiveEvent contains no non-serializable values; failure is unreachable.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a JSON text frame into a live event.
///
/// # Errors
///
/// Returns a [`CodecError`] when the frame is not a known event shape.
pub fn decode_event(text: &str) -> Result<LiveEvent, CodecError> {
    Ok(serde_json::from_str(text)?)
}
