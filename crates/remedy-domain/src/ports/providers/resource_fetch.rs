//! Resource Fetch Transport Port
//!
//! The only place the pipeline performs I/O for file content. Every call goes
//! through a [`super::ResourceCacheProvider`], which guarantees at most one
//! in-flight fetch per key.

use crate::error::Result;
use crate::value_objects::{ResourceEntry, ResourceKey};
use async_trait::async_trait;

/// Fetch transport for resource entries
///
/// Implementations report a key with no backing content as
/// [`crate::Error::ResourceNotFound`] and transport failures as
/// [`crate::Error::ResourceFetch`].
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the entry for `key`
    async fn fetch(&self, key: &ResourceKey) -> Result<ResourceEntry>;

    /// Get the name/identifier of this transport
    fn provider_name(&self) -> &str;
}
