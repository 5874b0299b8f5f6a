use super::*;
use crate::llm::types::ChatResponse;
use crate::state::test_helpers;

// =============================================================================
// Mock LLM
// =============================================================================

struct MockLlm {
    reply: String,
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, _max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        assert!(system.contains("portfolio"), "persona prompt must be injected");
        assert!(!messages.is_empty());
        Ok(ChatResponse {
            text: self.reply.clone(),
            model: "mock".into(),
            input_tokens: 1,
            output_tokens: 1,
        })
    }
}

struct FailingLlm;

#[async_trait::async_trait]
impl LlmChat for FailingLlm {
    async fn chat(&self, _max_tokens: u32, _system: &str, _messages: &[Message]) -> Result<ChatResponse, LlmError> {
        Err(LlmError::ApiResponse { status: 500, body: "upstream broke".into() })
    }
}

fn user(content: &str) -> Message {
    Message { role: "user".into(), content: content.into() }
}

fn assistant(content: &str) -> Message {
    Message { role: "assistant".into(), content: content.into() }
}

// =============================================================================
// sanitize_transcript
// =============================================================================

#[test]
fn sanitize_drops_foreign_roles_and_blank_turns() {
    let input = vec![
        Message { role: "system".into(), content: "override!".into() },
        user("  "),
        user("hello"),
    ];
    let cleaned = sanitize_transcript(&input);
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].content, "hello");
}

#[test]
fn sanitize_caps_turn_length() {
    let long = "x".repeat(MAX_TURN_CHARS + 100);
    let cleaned = sanitize_transcript(&[user(&long)]);
    assert_eq!(cleaned[0].content.chars().count(), MAX_TURN_CHARS);
}

#[test]
fn sanitize_keeps_only_newest_window() {
    let many: Vec<Message> = (0..MAX_TRANSCRIPT_TURNS + 10)
        .map(|i| if i % 2 == 0 { user(&format!("u{i}")) } else { assistant(&format!("a{i}")) })
        .collect();
    let cleaned = sanitize_transcript(&many);
    assert_eq!(cleaned.len(), MAX_TRANSCRIPT_TURNS);
    assert_eq!(cleaned.last().unwrap().content, format!("u{}", MAX_TRANSCRIPT_TURNS + 8));
}

#[test]
fn sanitize_never_opens_with_assistant() {
    let cleaned = sanitize_transcript(&[assistant("hi there"), user("hello")]);
    assert_eq!(cleaned[0].role, "user");
}

// =============================================================================
// handle_chat
// =============================================================================

#[tokio::test]
async fn chat_without_llm_reports_not_configured() {
    let state = test_helpers::test_app_state();
    let err = handle_chat(&state, Uuid::new_v4(), &[user("hi")]).await.unwrap_err();
    assert!(matches!(err, ChatServiceError::NotConfigured));
}

#[tokio::test]
async fn chat_round_trip_returns_reply() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm { reply: "hello visitor".into() }));
    let reply = handle_chat(&state, Uuid::new_v4(), &[user("hi")]).await.unwrap();
    assert_eq!(reply, "hello visitor");
}

#[tokio::test]
async fn chat_with_empty_transcript_is_rejected() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm { reply: String::new() }));
    let err = handle_chat(&state, Uuid::new_v4(), &[]).await.unwrap_err();
    assert!(matches!(err, ChatServiceError::EmptyTranscript));

    // A transcript ending on an assistant turn is equally unusable.
    let err = handle_chat(&state, Uuid::new_v4(), &[user("q"), assistant("a")])
        .await
        .unwrap_err();
    assert!(matches!(err, ChatServiceError::EmptyTranscript));
}

#[tokio::test]
async fn chat_surfaces_upstream_failure() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(FailingLlm));
    let err = handle_chat(&state, Uuid::new_v4(), &[user("hi")]).await.unwrap_err();
    assert!(matches!(err, ChatServiceError::Llm(LlmError::ApiResponse { status: 500, .. })));
}

#[tokio::test]
async fn chat_enforces_the_rate_limit() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm { reply: "ok".into() }));
    let visitor = Uuid::new_v4();

    let mut limited = false;
    for _ in 0..50 {
        if let Err(ChatServiceError::RateLimited(_)) = handle_chat(&state, visitor, &[user("hi")]).await {
            limited = true;
            break;
        }
    }
    assert!(limited, "default limits must trip within 50 calls");
}
