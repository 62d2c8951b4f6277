//! Resource Cache Port
//!
//! Memoizes [`super::ResourceFetcher`] results by resource key.
//!
//! ## Contract
//!
//! - Concurrent or repeated calls with an equal key await the same fetch: at
//!   most one fetch per key is in flight.
//! - Every caller awaiting a failed fetch observes the same error; the failure
//!   is not retained, so a later call retries.
//! - A successful entry is retained until the cache's eviction policy (if any)
//!   drops it. The default policy never evicts.

use crate::error::Result;
use crate::value_objects::{ResourceEntry, ResourceKey};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Resource cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCacheStats {
    /// Entries currently retained
    pub entries: u64,
    /// Underlying fetches started since creation
    pub fetches: u64,
    /// Fetches that failed
    pub failures: u64,
}

/// Resource cache provider interface
#[async_trait]
pub trait ResourceCacheProvider: Send + Sync + std::fmt::Debug {
    /// Resolve `key`, fetching it at most once concurrently
    async fn resolve(&self, key: &ResourceKey) -> Result<Arc<ResourceEntry>>;

    /// Get cache statistics
    async fn stats(&self) -> ResourceCacheStats;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
