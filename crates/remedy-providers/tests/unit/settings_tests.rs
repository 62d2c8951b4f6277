//! Tests for the settings stores

use futures::StreamExt;
use remedy_domain::ports::infrastructure::SettingsStore;
use remedy_domain::{Error, ThreadSettings};
use remedy_providers::settings::{InMemorySettingsStore, JsonFileSettingsStore};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_in_memory_update_announces_change() {
    let store = InMemorySettingsStore::default();
    let before = store.settings();
    let mut changes = store.changes();

    store.set_active_action("a.go:1:0:m", "Fix");

    tokio::time::timeout(Duration::from_secs(1), changes.next())
        .await
        .expect("notification")
        .expect("stream open");
    assert_eq!(store.settings().active_action("a.go:1:0:m"), Some("Fix"));
    // earlier snapshots are unaffected
    assert_eq!(before.active_action("a.go:1:0:m"), None);

    store.clear_active_action("a.go:1:0:m");
    assert!(store.settings().actions.is_empty());
}

#[test]
fn test_in_memory_replace() {
    let store = InMemorySettingsStore::new(ThreadSettings::new().with_active_action("d", "a"));
    store.replace(ThreadSettings::new());
    assert_eq!(store.settings().active_action("d"), None);
}

#[test]
fn test_json_file_missing_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonFileSettingsStore::open(dir.path().join("settings.json")).expect("open");
    assert!(store.settings().actions.is_empty());
}

#[test]
fn test_json_file_load_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"actions":{"f.go:5:0:unused import":"Remove import"}}"#)
        .expect("write");

    let store = JsonFileSettingsStore::open(&path).expect("open");
    assert_eq!(
        store.settings().active_action("f.go:5:0:unused import"),
        Some("Remove import")
    );

    std::fs::write(&path, r#"{"actions":{}}"#).expect("write");
    store.reload().expect("reload");
    assert!(store.settings().actions.is_empty());
}

#[test]
fn test_json_file_invalid_is_configuration_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").expect("write");
    assert!(matches!(
        JsonFileSettingsStore::open(&path),
        Err(Error::Configuration { .. })
    ));
}
