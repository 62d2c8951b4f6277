//! Resource cache configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resource cache policy
///
/// Both limits are unset by default: the cache retains every resolved entry
/// for the lifetime of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCacheConfig {
    /// Maximum number of retained entries
    pub max_capacity: Option<u64>,

    /// Seconds an entry is retained after being fetched
    pub time_to_live_secs: Option<u64>,
}

impl ResourceCacheConfig {
    /// Time-to-live as a duration
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live_secs.map(Duration::from_secs)
    }

    /// Whether any eviction policy is configured
    pub fn is_bounded(&self) -> bool {
        self.max_capacity.is_some() || self.time_to_live_secs.is_some()
    }
}
