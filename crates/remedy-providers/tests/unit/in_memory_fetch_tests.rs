//! Tests for the in-memory fetch transport

use remedy_domain::ports::providers::ResourceFetcher;
use remedy_domain::{Error, ResourceEntry, ResourceKey};
use remedy_providers::fetch::InMemoryResourceFetcher;

#[tokio::test]
async fn test_fetch_registered_entry() {
    let fetcher = InMemoryResourceFetcher::new();
    let key = ResourceKey::new("repo", None, "dir");
    fetcher.insert(ResourceEntry::directory(key.clone(), "c1"));

    let entry = fetcher.fetch(&key).await.expect("registered");
    assert!(entry.is_directory);
    assert_eq!(fetcher.fetch_count(), 1);
}

#[tokio::test]
async fn test_unknown_key_is_not_found() {
    let fetcher = InMemoryResourceFetcher::new();
    let key = ResourceKey::new("repo", None, "missing.go");
    match fetcher.fetch(&key).await {
        Err(Error::ResourceNotFound { resource }) => assert_eq!(resource, key.as_str()),
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_injected_failure_until_cleared() {
    let fetcher = InMemoryResourceFetcher::new();
    let key = ResourceKey::new("repo", None, "a.go");
    fetcher.insert_file(key.clone(), "c1", "x");
    fetcher.fail_with(key.clone(), Error::resource_fetch(key.as_str(), "timeout"));

    assert!(fetcher.fetch(&key).await.is_err());
    fetcher.clear_failure(&key);
    assert!(fetcher.fetch(&key).await.is_ok());
    assert_eq!(fetcher.fetch_count_for(&key), 2);
}

#[tokio::test]
async fn test_remove_stops_serving() {
    let fetcher = InMemoryResourceFetcher::new();
    let key = ResourceKey::new("repo", None, "a.go");
    fetcher.insert_file(key.clone(), "c1", "x");
    assert!(fetcher.remove(&key).is_some());
    assert!(fetcher.fetch(&key).await.is_err());
}
