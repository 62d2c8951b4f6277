//! Unit tests for thread settings

use remedy_domain::ThreadSettings;

#[test]
fn test_active_action_lookup() {
    let mut settings = ThreadSettings::new().with_active_action("f.go:1:0:m", "Fix it");
    assert_eq!(settings.active_action("f.go:1:0:m"), Some("Fix it"));
    assert_eq!(settings.active_action("other"), None);

    assert_eq!(settings.clear_active_action("f.go:1:0:m").as_deref(), Some("Fix it"));
    assert_eq!(settings.active_action("f.go:1:0:m"), None);
}

#[test]
fn test_settings_deserialize_missing_actions() {
    let settings: ThreadSettings = serde_json::from_str("{}").expect("deserialize");
    assert!(settings.actions.is_empty());

    let settings: ThreadSettings =
        serde_json::from_str(r#"{"actions":{"d":"a"}}"#).expect("deserialize");
    assert_eq!(settings.active_action("d"), Some("a"));
}
