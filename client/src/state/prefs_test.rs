use super::*;

#[test]
fn default_state_uses_light_english() {
    let state = PreferenceState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.language, "en");
    assert_eq!(state.applied_language, None);
    assert!(state.translations.is_empty());
}

#[test]
fn new_follows_config_defaults() {
    let config = ClientConfig {
        default_theme: Theme::Dark,
        default_language: "kn".to_owned(),
        ..ClientConfig::default()
    };
    let state = PreferenceState::new(&config);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.language, "kn");
    assert_eq!(state.translations.language(), "kn");
}

#[test]
fn in_sync_only_when_applied_matches_requested() {
    let mut state = PreferenceState::default();
    assert!(!state.is_in_sync());
    state.applied_language = Some("en".to_owned());
    assert!(state.is_in_sync());
    state.language = "kn".to_owned();
    assert!(!state.is_in_sync());
}
