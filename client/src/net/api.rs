//! REST adapters: one narrow async function per outbound call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors/`None` since these calls are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses are translated into `Result`
//! values at this boundary; callers render inline messages or fall back, and
//! nothing here panics or leaks an unhandled rejection.

#![allow(clippy::unused_async)]

use records::{
    Comment, ContactMessage, GameScore, GuestbookEntry, NewComment, NewGuestbookEntry, NewScore, NewTestimonial,
    Testimonial,
};

use super::types::{CodingStats, ContactAck};
use crate::state::activity::ActivityEvent;

/// Failure mode of the chat proxy call, mapped to user-visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    RateLimited,
    Unavailable,
    Failed(String),
}

/// Stable per-browser visitor id, generated once and persisted. The server
/// keys chat rate limits on it.
#[cfg(feature = "hydrate")]
fn visitor_id() -> uuid::Uuid {
    const KEY: &str = "visitor_id";
    if let Some(id) = crate::util::storage::load_json::<uuid::Uuid>(KEY) {
        return id;
    }
    let id = uuid::Uuid::new_v4();
    crate::util::storage::save_json(KEY, &id);
    id
}

#[cfg(feature = "hydrate")]
async fn error_body(resp: gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_body(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_body(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

// =============================================================================
// PUBLIC THIRD-PARTY APIS
// =============================================================================

/// Fetch one page of public GitHub events for `user`.
///
/// # Errors
///
/// Returns a short message on transport failure or an unexpected body.
pub async fn fetch_github_events(user: &str, page: usize, per_page: usize) -> Result<Vec<ActivityEvent>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("https://api.github.com/users/{user}/events/public?page={page}&per_page={per_page}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 403 {
            return Err("rate limit exceeded".to_owned());
        }
        if !resp.ok() {
            return Err(format!("couldn't load activity (status {})", resp.status()));
        }
        let raw = resp.text().await.map_err(|e| e.to_string())?;
        super::types::flatten_events(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, page, per_page);
        Err("not available on server".to_owned())
    }
}

/// Fetch the public contribution total for `user`. Best-effort: `None` on
/// any failure, the panel simply omits the figure.
pub async fn fetch_contribution_total(user: &str) -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("https://github-contributions-api.jogruber.de/v4/{user}?y=last");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let raw = resp.text().await.ok()?;
        super::types::contribution_total(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        None
    }
}

// =============================================================================
// PROXY ROUTES
// =============================================================================

/// Send the running transcript to the chat proxy and return the reply text.
///
/// # Errors
///
/// Returns a [`ChatError`] mapped from the proxy's status code.
pub async fn post_chat(transcript: &[(String, String)]) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct WireMessage<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct ChatReply {
            reply: String,
        }

        let messages: Vec<WireMessage<'_>> = transcript
            .iter()
            .map(|(role, content)| WireMessage { role, content })
            .collect();
        let body = serde_json::json!({ "visitor": visitor_id(), "messages": messages });

        let resp = gloo_net::http::Request::post("/api/chat")
            .json(&body)
            .map_err(|e| ChatError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Failed(e.to_string()))?;

        match resp.status() {
            200 => resp
                .json::<ChatReply>()
                .await
                .map(|r| r.reply)
                .map_err(|e| ChatError::Failed(e.to_string())),
            429 => Err(ChatError::RateLimited),
            503 => Err(ChatError::Unavailable),
            _ => Err(ChatError::Failed(error_body(resp).await)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = transcript;
        Err(ChatError::Unavailable)
    }
}

/// Fetch normalized coding-time stats from the same-origin proxy.
///
/// # Errors
///
/// Returns a short message on transport failure or upstream error.
pub async fn fetch_coding_stats() -> Result<CodingStats, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/stats/coding").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// RECORD STORE
// =============================================================================

/// List comments, oldest first.
pub async fn fetch_comments() -> Result<Vec<Comment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/comments").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a comment; returns the created record.
pub async fn post_comment(input: &NewComment) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/comments", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Like a comment; returns the new like count.
pub async fn like_comment(id: uuid::Uuid) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Likes {
            likes: i64,
        }
        let likes: Likes = post_json(&format!("/api/comments/{id}/like"), &serde_json::json!({})).await?;
        Ok(likes.likes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// List guestbook entries, newest first.
pub async fn fetch_guestbook() -> Result<Vec<GuestbookEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/guestbook").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign the guestbook; returns the created entry.
pub async fn post_guestbook(input: &NewGuestbookEntry) -> Result<GuestbookEntry, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/guestbook", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// List testimonials.
pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/testimonials").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a testimonial; returns the created record.
pub async fn post_testimonial(input: &NewTestimonial) -> Result<Testimonial, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/testimonials", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Send the contact form. The ack distinguishes full success from
/// stored-but-email-failed.
pub async fn post_contact(input: &ContactMessage) -> Result<ContactAck, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/contact", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Fetch the ranked leaderboard (top scores, descending).
pub async fn fetch_top_scores() -> Result<Vec<GameScore>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/scores").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a finished game's score.
pub async fn post_score(input: &NewScore) -> Result<GameScore, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/scores", input).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Read a named counter.
pub async fn fetch_counter(name: &str) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Value {
            value: i64,
        }
        let v: Value = get_json(&format!("/api/counters/{name}")).await?;
        Ok(v.value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Atomically increment a named counter; returns the new value.
pub async fn hit_counter(name: &str) -> Result<i64, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Value {
            value: i64,
        }
        let v: Value = post_json(&format!("/api/counters/{name}/hit"), &serde_json::json!({})).await?;
        Ok(v.value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}
