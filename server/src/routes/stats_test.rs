use super::*;

#[test]
fn normalize_converts_seconds_to_hours() {
    let raw = r#"{
        "data": {
            "total_seconds": 72000.0,
            "daily_average": 7200.0,
            "languages": [{"name": "Rust", "percent": 80.0}, {"name": "TypeScript"}]
        }
    }"#;
    let stats = normalize_stats(raw).unwrap();
    assert!((stats.total_hours - 20.0).abs() < 1e-9);
    assert!((stats.daily_average_hours - 2.0).abs() < 1e-9);
    assert_eq!(stats.top_language.as_deref(), Some("Rust"));
}

#[test]
fn normalize_tolerates_missing_fields() {
    let stats = normalize_stats(r#"{"data":{}}"#).unwrap();
    assert_eq!(stats.total_hours, 0.0);
    assert_eq!(stats.top_language, None);
}

#[test]
fn normalize_rejects_garbage() {
    assert!(normalize_stats("[]").is_err());
    assert!(normalize_stats("no").is_err());
}
