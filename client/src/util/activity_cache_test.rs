use super::*;

fn events(n: usize) -> Vec<ActivityEvent> {
    (0..n)
        .map(|i| ActivityEvent {
            id: format!("e{i}"),
            kind: "WatchEvent".into(),
            repo: "me/site".into(),
            created_at: String::new(),
        })
        .collect()
}

#[test]
fn successful_fetch_wins_over_any_cache() {
    let cache = Some(CachedEvents { fetched_at_ms: 0.0, events: events(2) });
    let resolution = resolve(Ok(events(5)), cache, 1_000.0);
    assert_eq!(resolution, Resolution::Live(events(5)));
}

#[test]
fn failed_fetch_with_fresh_cache_serves_cache_without_error() {
    let now = 10.0 * 60.0 * 1000.0;
    let cache = Some(CachedEvents { fetched_at_ms: now - FRESH_WINDOW_MS + 1.0, events: events(3) });
    let resolution = resolve(Err("offline".into()), cache, now);
    assert_eq!(resolution, Resolution::Stale(events(3)));
}

#[test]
fn failed_fetch_with_expired_cache_shows_error() {
    let now = 10.0 * 60.0 * 1000.0;
    let cache = Some(CachedEvents { fetched_at_ms: now - FRESH_WINDOW_MS - 1.0, events: events(3) });
    let resolution = resolve(Err("offline".into()), cache, now);
    assert_eq!(resolution, Resolution::Failed("offline".into()));
}

#[test]
fn failed_fetch_with_no_cache_shows_error() {
    let resolution = resolve(Err("couldn't load".into()), None, 0.0);
    assert_eq!(resolution, Resolution::Failed("couldn't load".into()));
}

#[test]
fn cache_exactly_at_window_edge_still_counts_as_fresh() {
    let now = FRESH_WINDOW_MS;
    let cache = Some(CachedEvents { fetched_at_ms: 0.0, events: events(1) });
    assert_eq!(resolve(Err("x".into()), cache, now), Resolution::Stale(events(1)));
}
