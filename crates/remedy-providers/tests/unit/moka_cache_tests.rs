//! Tests for the moka resource cache

use remedy_domain::ports::providers::ResourceCacheProvider;
use remedy_domain::{Error, ResourceKey};
use remedy_providers::cache::MokaResourceCache;
use remedy_providers::fetch::InMemoryResourceFetcher;
use std::sync::Arc;
use std::time::Duration;

fn key(path: &str) -> ResourceKey {
    ResourceKey::new("repo", Some("main"), path)
}

fn slow_fetcher() -> Arc<InMemoryResourceFetcher> {
    let fetcher = InMemoryResourceFetcher::new().with_delay(Duration::from_millis(50));
    fetcher.insert_file(key("a.go"), "c1", "package a\n");
    Arc::new(fetcher)
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_fetch() {
    let fetcher = slow_fetcher();
    let cache = MokaResourceCache::new(fetcher.clone());
    let k = key("a.go");

    let (first, second, third) = tokio::join!(cache.resolve(&k), cache.resolve(&k), cache.resolve(&k));

    assert_eq!(fetcher.fetch_count(), 1);
    let first = first.expect("resolved");
    assert!(Arc::ptr_eq(&first, &second.expect("resolved")));
    assert!(Arc::ptr_eq(&first, &third.expect("resolved")));
}

#[tokio::test]
async fn test_resolved_entry_is_retained() {
    let fetcher = slow_fetcher();
    let cache = MokaResourceCache::new(fetcher.clone());
    let k = key("a.go");

    cache.resolve(&k).await.expect("resolved");
    cache.resolve(&k).await.expect("resolved");

    let stats = cache.stats().await;
    assert_eq!(stats.fetches, 1);
    assert_eq!(stats.entries, 1);
    assert_eq!(fetcher.fetch_count_for(&k), 1);
}

#[tokio::test]
async fn test_concurrent_waiters_observe_same_failure() {
    let fetcher = slow_fetcher();
    let k = key("broken.go");
    fetcher.fail_with(k.clone(), Error::resource_fetch(k.as_str(), "connection reset"));
    let cache = MokaResourceCache::new(fetcher.clone());

    let (first, second) = tokio::join!(cache.resolve(&k), cache.resolve(&k));

    assert_eq!(fetcher.fetch_count(), 1);
    for result in [first, second] {
        match result {
            Err(Error::ResourceFetch { message, .. }) => assert_eq!(message, "connection reset"),
            other => panic!("Expected ResourceFetch, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_failure_is_not_cached() {
    let fetcher = Arc::new(InMemoryResourceFetcher::new());
    let cache = MokaResourceCache::new(fetcher.clone());
    let k = key("late.go");

    assert!(matches!(
        cache.resolve(&k).await,
        Err(Error::ResourceNotFound { .. })
    ));

    fetcher.insert_file(k.clone(), "c2", "package late\n");
    let entry = cache.resolve(&k).await.expect("retry succeeds");
    assert_eq!(entry.commit, "c2");

    let stats = cache.stats().await;
    assert_eq!(stats.fetches, 2);
    assert_eq!(stats.failures, 1);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let fetcher = slow_fetcher();
    let cache = MokaResourceCache::new(fetcher.clone());
    let k = key("a.go");

    cache.resolve(&k).await.expect("resolved");
    cache.invalidate(&k).await;
    cache.resolve(&k).await.expect("resolved");

    assert_eq!(fetcher.fetch_count(), 2);
}

#[tokio::test]
async fn test_distinct_keys_fetch_separately() {
    let fetcher = slow_fetcher();
    fetcher.insert_file(key("b.go"), "c1", "package b\n");
    let cache = MokaResourceCache::with_policy(fetcher.clone(), Some(100), Some(Duration::from_secs(60)));

    let (key_a, key_b) = (key("a.go"), key("b.go"));
    let (a, b) = tokio::join!(cache.resolve(&key_a), cache.resolve(&key_b));
    assert_eq!(a.expect("a").path, "a.go");
    assert_eq!(b.expect("b").path, "b.go");
    assert_eq!(fetcher.fetch_count(), 2);
    assert_eq!(cache.provider_name(), "moka");
}
