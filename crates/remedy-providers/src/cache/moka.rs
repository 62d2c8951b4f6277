//! Moka resource cache
//!
//! Memoizes a [`ResourceFetcher`] with `moka::future::Cache::try_get_with`,
//! which coalesces concurrent loads of the same key into one evaluation and
//! hands the same error to every waiter without caching it.
//!
//! ## Example
//!
//! ```ignore
//! use remedy_providers::cache::MokaResourceCache;
//! use remedy_providers::fetch::InMemoryResourceFetcher;
//! use std::sync::Arc;
//!
//! let cache = MokaResourceCache::new(Arc::new(InMemoryResourceFetcher::new()));
//! let entry = cache.resolve(&key).await?;
//! ```

use async_trait::async_trait;
use moka::future::Cache;
use remedy_domain::error::Result;
use remedy_domain::ports::providers::{ResourceCacheProvider, ResourceCacheStats, ResourceFetcher};
use remedy_domain::value_objects::{ResourceEntry, ResourceKey};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Moka-backed memoizing resource cache
///
/// Unbounded and never expiring unless a capacity or TTL is configured.
#[derive(Clone)]
pub struct MokaResourceCache {
    cache: Cache<ResourceKey, Arc<ResourceEntry>>,
    fetcher: Arc<dyn ResourceFetcher>,
    max_capacity: Option<u64>,
    time_to_live: Option<Duration>,
    fetches: Arc<AtomicU64>,
    failures: Arc<AtomicU64>,
}

impl MokaResourceCache {
    /// Unbounded cache over `fetcher`
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self::with_policy(fetcher, None, None)
    }

    /// Cache over `fetcher` with an optional capacity and time-to-live
    pub fn with_policy(
        fetcher: Arc<dyn ResourceFetcher>,
        max_capacity: Option<u64>,
        time_to_live: Option<Duration>,
    ) -> Self {
        let mut builder = Cache::builder();
        if let Some(capacity) = max_capacity {
            builder = builder.max_capacity(capacity);
        }
        if let Some(ttl) = time_to_live {
            builder = builder.time_to_live(ttl);
        }
        Self {
            cache: builder.build(),
            fetcher,
            max_capacity,
            time_to_live,
            fetches: Arc::new(AtomicU64::new(0)),
            failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Drop a retained entry so the next resolution fetches again
    pub async fn invalidate(&self, key: &ResourceKey) {
        self.cache.invalidate(key).await;
    }

    async fn load(&self, key: ResourceKey) -> Result<Arc<ResourceEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        debug!(resource = %key, transport = self.fetcher.provider_name(), "Fetching resource");
        match self.fetcher.fetch(&key).await {
            Ok(entry) => Ok(Arc::new(entry)),
            Err(e) => {
                self.failures.fetch_add(1, Ordering::SeqCst);
                warn!(resource = %key, error = %e, "Resource fetch failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ResourceCacheProvider for MokaResourceCache {
    async fn resolve(&self, key: &ResourceKey) -> Result<Arc<ResourceEntry>> {
        self.cache
            .try_get_with(key.clone(), self.load(key.clone()))
            .await
            .map_err(|e| (*e).clone())
    }

    async fn stats(&self) -> ResourceCacheStats {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        ResourceCacheStats {
            entries: self.cache.entry_count(),
            fetches: self.fetches.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
        }
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaResourceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaResourceCache")
            .field("transport", &self.fetcher.provider_name())
            .field("max_capacity", &self.max_capacity)
            .field("time_to_live", &self.time_to_live)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
