//! Chat service — persona-prompted proxy to the LLM provider.
//!
//! DESIGN
//! ======
//! Receives the visitor's running transcript, prepends nothing to it (the
//! fixed persona rides in the system prompt), rate-limits per visitor, and
//! forwards to whichever [`LlmChat`] the server was configured with. The
//! transcript is sanitized to the two roles the providers accept and capped
//! so a hostile client can't ship an unbounded payload.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

const PERSONA_PROMPT: &str = include_str!("../../templates/persona.txt");

const DEFAULT_CHAT_MAX_TOKENS: u32 = 1024;
/// Oldest turns beyond this are dropped before forwarding.
pub const MAX_TRANSCRIPT_TURNS: usize = 40;
/// Per-turn content cap, characters.
pub const MAX_TURN_CHARS: usize = 4000;

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("assistant is not configured")]
    NotConfigured,
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Drop malformed turns, clamp lengths, and keep only the newest window.
/// The last turn must be the visitor's.
#[must_use]
pub fn sanitize_transcript(messages: &[Message]) -> Vec<Message> {
    let mut cleaned: Vec<Message> = messages
        .iter()
        .filter(|m| matches!(m.role.as_str(), "user" | "assistant"))
        .filter(|m| !m.content.trim().is_empty())
        .map(|m| Message {
            role: m.role.clone(),
            content: m.content.chars().take(MAX_TURN_CHARS).collect(),
        })
        .collect();

    if cleaned.len() > MAX_TRANSCRIPT_TURNS {
        cleaned.drain(..cleaned.len() - MAX_TRANSCRIPT_TURNS);
    }
    // Providers reject a transcript that opens with an assistant turn.
    while cleaned.first().is_some_and(|m| m.role == "assistant") {
        cleaned.remove(0);
    }
    cleaned
}

/// Run one chat exchange and return the assistant's reply text.
///
/// # Errors
///
/// Returns a [`ChatServiceError`] covering missing configuration, rate
/// limiting, an empty transcript, and upstream failures.
pub async fn handle_chat(state: &AppState, visitor: Uuid, messages: &[Message]) -> Result<String, ChatServiceError> {
    let llm: &Arc<dyn LlmChat> = state.llm.as_ref().ok_or(ChatServiceError::NotConfigured)?;

    state.rate_limiter.check_and_record(visitor)?;

    let transcript = sanitize_transcript(messages);
    if transcript.last().is_none_or(|m| m.role != "user") {
        return Err(ChatServiceError::EmptyTranscript);
    }

    let max_tokens = std::env::var("CHAT_MAX_TOKENS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CHAT_MAX_TOKENS);

    let response = llm.chat(max_tokens, PERSONA_PROMPT, &transcript).await?;
    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "chat: reply generated"
    );
    Ok(response.text)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
