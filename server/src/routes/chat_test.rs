use super::*;
use crate::rate_limit::RateLimitError;

#[test]
fn not_configured_is_a_clear_server_error() {
    let (status, message) = error_to_response(&ChatServiceError::NotConfigured);
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(message.contains("not configured"));
}

#[test]
fn upstream_status_is_mirrored() {
    let err = ChatServiceError::Llm(LlmError::ApiResponse { status: 429, body: "slow down".into() });
    let (status, _) = error_to_response(&err);
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let err = ChatServiceError::Llm(LlmError::ApiResponse { status: 529, body: "overloaded".into() });
    let (status, _) = error_to_response(&err);
    assert_eq!(status.as_u16(), 529);
}

#[test]
fn unmappable_upstream_status_falls_back_to_bad_gateway() {
    let err = ChatServiceError::Llm(LlmError::ApiResponse { status: 42, body: String::new() });
    let (status, _) = error_to_response(&err);
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[test]
fn upstream_body_never_reaches_the_caller() {
    let err = ChatServiceError::Llm(LlmError::ApiResponse { status: 500, body: "x-api-key=sk-secret".into() });
    let (_, message) = error_to_response(&err);
    assert!(!message.contains("sk-secret"));
}

#[test]
fn transport_failure_is_a_generic_500() {
    let err = ChatServiceError::Llm(LlmError::ApiRequest("connection refused".into()));
    let (status, _) = error_to_response(&err);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn rate_limit_is_429() {
    let err = ChatServiceError::RateLimited(RateLimitError::VisitorExceeded { limit: 10, window_secs: 60 });
    let (status, message) = error_to_response(&err);
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(message.contains("rate limit"));
}

#[test]
fn chat_request_accepts_missing_visitor() {
    let request: ChatRequest =
        serde_json::from_str(r#"{"messages":[{"role":"user","content":"hi"}]}"#).unwrap();
    assert!(request.visitor.is_none());
    assert_eq!(request.messages.len(), 1);
}
