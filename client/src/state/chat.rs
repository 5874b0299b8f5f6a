//! State for the assistant chat widget.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Fallback line appended when the generation call fails. The transcript
/// itself is never rolled back on failure.
pub const CHAT_FALLBACK: &str = "Sorry, I couldn't reach the assistant just now. Try again in a moment.";

/// State for the chat panel: an append-only transcript plus a pending flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

/// A single chat turn.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: String,
    pub content: String,
}

impl ChatState {
    /// Append a user turn and mark the exchange pending.
    pub fn push_user(&mut self, content: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: "user".into(),
            content,
        });
        self.loading = true;
    }

    /// Append the assistant reply (or the fallback) and clear the pending
    /// flag.
    pub fn push_assistant(&mut self, content: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: "assistant".into(),
            content,
        });
        self.loading = false;
    }

    /// The running transcript as (role, content) pairs for the proxy call.
    #[must_use]
    pub fn transcript(&self) -> Vec<(String, String)> {
        self.messages
            .iter()
            .map(|m| (m.role.clone(), m.content.clone()))
            .collect()
    }
}
