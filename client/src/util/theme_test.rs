use super::*;

#[test]
fn default_is_light_with_accent() {
    let prefs = ThemePrefs::default();
    assert!(!prefs.dark);
    assert!(!prefs.accent.is_empty());
}

#[test]
fn prefs_round_trip_through_persisted_representation() {
    // The storage layer persists serde_json — the round trip through that
    // representation must be lossless.
    let prefs = ThemePrefs { dark: true, accent: "#ff8800".into() };
    let raw = serde_json::to_string(&prefs).unwrap();
    let restored: ThemePrefs = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, prefs);
}

#[test]
fn load_without_browser_falls_back_to_default() {
    // Native test build has no storage and no media query: expect defaults.
    let prefs = load();
    assert_eq!(prefs, ThemePrefs::default());
}
