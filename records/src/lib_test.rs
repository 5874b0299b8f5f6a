use super::*;

fn comment_input(author: &str, body: &str) -> NewComment {
    NewComment { author: author.into(), body: body.into() }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Visitor@Example.COM "), Some("visitor@example.com".into()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("visitor.example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_parts() {
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("visitor@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
    assert_eq!(normalize_email("   "), None);
}

// =============================================================================
// Comment validation
// =============================================================================

#[test]
fn valid_comment_passes() {
    assert!(validate_comment(&comment_input("Ada", "great site")).is_ok());
}

#[test]
fn comment_missing_author_is_rejected() {
    let err = validate_comment(&comment_input("   ", "body")).unwrap_err();
    assert_eq!(err, ValidationError::Missing("name"));
    assert_eq!(err.to_string(), "name is required");
}

#[test]
fn comment_missing_body_is_rejected() {
    let err = validate_comment(&comment_input("Ada", "")).unwrap_err();
    assert_eq!(err, ValidationError::Missing("comment"));
}

#[test]
fn comment_overlong_body_is_rejected() {
    let body = "x".repeat(MAX_BODY_LEN + 1);
    let err = validate_comment(&comment_input("Ada", &body)).unwrap_err();
    assert_eq!(err, ValidationError::TooLong { field: "comment", max: MAX_BODY_LEN });
}

// =============================================================================
// Contact validation
// =============================================================================

#[test]
fn valid_contact_passes() {
    let input = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "hello".into(),
    };
    assert!(validate_contact(&input).is_ok());
}

#[test]
fn contact_bad_email_is_rejected() {
    let input = ContactMessage {
        name: "Ada".into(),
        email: "not-an-address".into(),
        message: "hello".into(),
    };
    assert_eq!(validate_contact(&input).unwrap_err(), ValidationError::InvalidEmail);
}

#[test]
fn contact_missing_message_is_rejected() {
    let input = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: " ".into(),
    };
    assert_eq!(validate_contact(&input).unwrap_err(), ValidationError::Missing("message"));
}

// =============================================================================
// Score validation
// =============================================================================

#[test]
fn negative_score_is_rejected() {
    let input = NewScore { player: "Ada".into(), score: -1 };
    assert!(validate_score(&input).is_err());
}

#[test]
fn zero_score_is_accepted() {
    let input = NewScore { player: "Ada".into(), score: 0 };
    assert!(validate_score(&input).is_ok());
}

// =============================================================================
// Live event codec
// =============================================================================

#[test]
fn comment_event_round_trips() {
    let event = LiveEvent::CommentAdded {
        comment: Comment {
            id: Uuid::new_v4(),
            author: "Ada".into(),
            body: "hi".into(),
            likes: 0,
            created_at_ms: 1_700_000_000_000.0,
        },
    };
    let decoded = decode_event(&encode_event(&event)).unwrap();
    let LiveEvent::CommentAdded { comment } = decoded else {
        panic!("wrong event kind");
    };
    assert_eq!(comment.author, "Ada");
    assert_eq!(comment.likes, 0);
}

#[test]
fn event_wire_tag_is_snake_case() {
    let event = LiveEvent::CounterChanged { counter: CounterValue { name: "views".into(), value: 3 } };
    let encoded = encode_event(&event);
    assert!(encoded.contains(r#""kind":"counter_changed""#), "{encoded}");
}

#[test]
fn decode_rejects_unknown_kind() {
    assert!(decode_event(r#"{"kind":"mystery"}"#).is_err());
    assert!(decode_event("not json").is_err());
}
