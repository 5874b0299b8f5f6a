//! Record store — all Postgres access for the site's collections.
//!
//! DESIGN
//! ======
//! Validation happens here, at the single entry point to the store, so
//! every route maps `StoreError::Invalid` to a 422 with the human-readable
//! reason. Counter and like increments are SQL-side
//! (`SET value = value + 1 … RETURNING`) — two concurrent likes both land,
//! which a read-then-write from the client could not guarantee.
//!
//! Timestamps are server-assigned by `now()` and surfaced as epoch
//! milliseconds; the cast to `double precision` matters because `extract`
//! yields `numeric`.

use records::{
    Comment, ContactMessage, GameScore, GuestbookEntry, NewComment, NewGuestbookEntry, NewScore, NewTestimonial,
    Testimonial, ValidationError, validate_comment, validate_contact, validate_guestbook, validate_score,
    validate_testimonial,
};
use sqlx::PgPool;
use uuid::Uuid;

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;

/// Leaderboard size.
pub const TOP_SCORES: i64 = 10;

const EPOCH_MS: &str = "extract(epoch from created_at)::double precision * 1000.0";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// COMMENTS
// =============================================================================

/// List comments, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_comments(pool: &PgPool) -> Result<Vec<Comment>, StoreError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, i64, f64)>(&format!(
        "SELECT id, author, body, likes, {EPOCH_MS} FROM comments ORDER BY created_at ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, author, body, likes, created_at_ms)| Comment { id, author, body, likes, created_at_ms })
        .collect())
}

/// Create a comment. Likes start at zero.
///
/// # Errors
///
/// Returns `Invalid` for rejected input or a database error.
pub async fn create_comment(pool: &PgPool, input: &NewComment) -> Result<Comment, StoreError> {
    validate_comment(input)?;
    let id = Uuid::new_v4();
    let (created_at_ms,) = sqlx::query_as::<_, (f64,)>(&format!(
        "INSERT INTO comments (id, author, body) VALUES ($1, $2, $3) RETURNING {EPOCH_MS}"
    ))
    .bind(id)
    .bind(input.author.trim())
    .bind(input.body.trim())
    .fetch_one(pool)
    .await?;

    Ok(Comment {
        id,
        author: input.author.trim().to_owned(),
        body: input.body.trim().to_owned(),
        likes: 0,
        created_at_ms,
    })
}

/// Atomically bump a comment's like counter; returns the new count.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or a database error.
pub async fn like_comment(pool: &PgPool, id: Uuid) -> Result<i64, StoreError> {
    let row = sqlx::query_as::<_, (i64,)>("UPDATE comments SET likes = likes + 1 WHERE id = $1 RETURNING likes")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|(likes,)| likes).ok_or(StoreError::NotFound)
}

// =============================================================================
// GUESTBOOK
// =============================================================================

/// List guestbook entries, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_guestbook(pool: &PgPool) -> Result<Vec<GuestbookEntry>, StoreError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, f64)>(&format!(
        "SELECT id, author, message, {EPOCH_MS} FROM guestbook_entries ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, author, message, created_at_ms)| GuestbookEntry { id, author, message, created_at_ms })
        .collect())
}

/// Sign the guestbook.
///
/// # Errors
///
/// Returns `Invalid` for rejected input or a database error.
pub async fn create_guestbook_entry(pool: &PgPool, input: &NewGuestbookEntry) -> Result<GuestbookEntry, StoreError> {
    validate_guestbook(input)?;
    let id = Uuid::new_v4();
    let (created_at_ms,) = sqlx::query_as::<_, (f64,)>(&format!(
        "INSERT INTO guestbook_entries (id, author, message) VALUES ($1, $2, $3) RETURNING {EPOCH_MS}"
    ))
    .bind(id)
    .bind(input.author.trim())
    .bind(input.message.trim())
    .fetch_one(pool)
    .await?;

    Ok(GuestbookEntry {
        id,
        author: input.author.trim().to_owned(),
        message: input.message.trim().to_owned(),
        created_at_ms,
    })
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

/// List testimonials, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_testimonials(pool: &PgPool) -> Result<Vec<Testimonial>, StoreError> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, String, f64)>(&format!(
        "SELECT id, author, role, message, {EPOCH_MS} FROM testimonials ORDER BY created_at ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, author, role, message, created_at_ms)| Testimonial { id, author, role, message, created_at_ms })
        .collect())
}

/// Submit a testimonial.
///
/// # Errors
///
/// Returns `Invalid` for rejected input or a database error.
pub async fn create_testimonial(pool: &PgPool, input: &NewTestimonial) -> Result<Testimonial, StoreError> {
    validate_testimonial(input)?;
    let id = Uuid::new_v4();
    let (created_at_ms,) = sqlx::query_as::<_, (f64,)>(&format!(
        "INSERT INTO testimonials (id, author, role, message) VALUES ($1, $2, $3, $4) RETURNING {EPOCH_MS}"
    ))
    .bind(id)
    .bind(input.author.trim())
    .bind(input.role.trim())
    .bind(input.message.trim())
    .fetch_one(pool)
    .await?;

    Ok(Testimonial {
        id,
        author: input.author.trim().to_owned(),
        role: input.role.trim().to_owned(),
        message: input.message.trim().to_owned(),
        created_at_ms,
    })
}

// =============================================================================
// CONTACT MESSAGES
// =============================================================================

/// Store a contact message; the notification email is the caller's concern.
///
/// # Errors
///
/// Returns `Invalid` for rejected input or a database error.
pub async fn create_contact_message(pool: &PgPool, input: &ContactMessage) -> Result<Uuid, StoreError> {
    validate_contact(input)?;
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO contact_messages (id, name, email, message) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(input.name.trim())
        .bind(input.email.trim())
        .bind(input.message.trim())
        .execute(pool)
        .await?;
    Ok(id)
}

// =============================================================================
// GAME SCORES
// =============================================================================

/// The ranked leaderboard: top scores, descending. Ties break arbitrarily.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn top_scores(pool: &PgPool) -> Result<Vec<GameScore>, StoreError> {
    let rows = sqlx::query_as::<_, (Uuid, String, i64, f64)>(&format!(
        "SELECT id, player, score, {EPOCH_MS} FROM game_scores ORDER BY score DESC LIMIT $1"
    ))
    .bind(TOP_SCORES)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, player, score, created_at_ms)| GameScore { id, player, score, created_at_ms })
        .collect())
}

/// Record a finished game's score.
///
/// # Errors
///
/// Returns `Invalid` for rejected input or a database error.
pub async fn create_score(pool: &PgPool, input: &NewScore) -> Result<GameScore, StoreError> {
    validate_score(input)?;
    let id = Uuid::new_v4();
    let (created_at_ms,) = sqlx::query_as::<_, (f64,)>(&format!(
        "INSERT INTO game_scores (id, player, score) VALUES ($1, $2, $3) RETURNING {EPOCH_MS}"
    ))
    .bind(id)
    .bind(input.player.trim())
    .bind(input.score)
    .fetch_one(pool)
    .await?;

    Ok(GameScore { id, player: input.player.trim().to_owned(), score: input.score, created_at_ms })
}

// =============================================================================
// COUNTERS
// =============================================================================

/// Counter names are a closed, server-controlled set.
#[must_use]
pub fn valid_counter_name(name: &str) -> bool {
    matches!(name, "views" | "likes" | "clicks")
}

/// Read a named counter; absent counters read as zero.
///
/// # Errors
///
/// Returns `Invalid` for unknown names or a database error.
pub async fn get_counter(pool: &PgPool, name: &str) -> Result<i64, StoreError> {
    if !valid_counter_name(name) {
        return Err(StoreError::Invalid(ValidationError::Missing("counter")));
    }
    let row = sqlx::query_as::<_, (i64,)>("SELECT value FROM counters WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row.map_or(0, |(value,)| value))
}

/// Atomically increment a named counter; returns the new value. The upsert
/// creates the row on first hit.
///
/// # Errors
///
/// Returns `Invalid` for unknown names or a database error.
pub async fn increment_counter(pool: &PgPool, name: &str) -> Result<i64, StoreError> {
    if !valid_counter_name(name) {
        return Err(StoreError::Invalid(ValidationError::Missing("counter")));
    }
    let (value,) = sqlx::query_as::<_, (i64,)>(
        "INSERT INTO counters (name, value) VALUES ($1, 1)
         ON CONFLICT (name) DO UPDATE SET value = counters.value + 1
         RETURNING value",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(value)
}
