use super::*;

#[test]
fn message_serde_round_trip() {
    let msg = Message { role: "user".into(), content: "hi".into() };
    let json = serde_json::to_string(&msg).unwrap();
    let restored: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.role, "user");
    assert_eq!(restored.content, "hi");
}

#[test]
fn upstream_status_only_for_api_response() {
    let err = LlmError::ApiResponse { status: 429, body: String::new() };
    assert_eq!(err.upstream_status(), Some(429));
    assert_eq!(LlmError::ApiRequest("timeout".into()).upstream_status(), None);
}

#[test]
fn error_messages_name_the_failure() {
    let err = LlmError::MissingApiKey { var: "ANTHROPIC_API_KEY".into() };
    assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
}
