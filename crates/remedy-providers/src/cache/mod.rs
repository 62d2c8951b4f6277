//! Resource Cache Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`MokaResourceCache`] | Moka future cache with single-flight loads and optional capacity/TTL |

#[cfg(feature = "cache-moka")]
pub mod moka;

#[cfg(feature = "cache-moka")]
pub use moka::MokaResourceCache;

pub use remedy_domain::ports::providers::ResourceCacheStats;
