//! In-memory fetch transport
//!
//! Serves entries registered up front. Counts every fetch, overall and per
//! key, and can be told to fail or to delay, which makes it the transport of
//! choice for exercising the cache's single-flight behavior.

use async_trait::async_trait;
use dashmap::DashMap;
use remedy_domain::error::{Error, Result};
use remedy_domain::ports::providers::ResourceFetcher;
use remedy_domain::value_objects::{ResourceEntry, ResourceKey};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// In-memory fetch transport
#[derive(Debug, Default)]
pub struct InMemoryResourceFetcher {
    entries: DashMap<ResourceKey, ResourceEntry>,
    failures: DashMap<ResourceKey, Error>,
    fetches_by_key: DashMap<ResourceKey, u64>,
    fetches: AtomicU64,
    delay: Option<Duration>,
}

impl InMemoryResourceFetcher {
    /// Empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for `delay` before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Serve `entry` for its own key
    pub fn insert(&self, entry: ResourceEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Serve a regular file
    pub fn insert_file<C: Into<String>, S: Into<String>>(
        &self,
        key: ResourceKey,
        commit: C,
        content: S,
    ) {
        self.insert(ResourceEntry::file(key, commit, content));
    }

    /// Stop serving `key`
    pub fn remove(&self, key: &ResourceKey) -> Option<ResourceEntry> {
        self.entries.remove(key).map(|(_, entry)| entry)
    }

    /// Answer fetches of `key` with `error` until cleared
    pub fn fail_with(&self, key: ResourceKey, error: Error) {
        self.failures.insert(key, error);
    }

    /// Stop failing fetches of `key`
    pub fn clear_failure(&self, key: &ResourceKey) {
        self.failures.remove(key);
    }

    /// Fetches performed so far
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Fetches of `key` performed so far
    pub fn fetch_count_for(&self, key: &ResourceKey) -> u64 {
        self.fetches_by_key.get(key).map_or(0, |count| *count)
    }
}

#[async_trait]
impl ResourceFetcher for InMemoryResourceFetcher {
    async fn fetch(&self, key: &ResourceKey) -> Result<ResourceEntry> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        *self.fetches_by_key.entry(key.clone()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self.failures.get(key) {
            return Err(error.value().clone());
        }
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::resource_not_found(key.as_str()))
    }

    fn provider_name(&self) -> &str {
        "in-memory"
    }
}
