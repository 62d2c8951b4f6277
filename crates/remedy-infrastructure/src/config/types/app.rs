//! Root configuration

use super::{DiffConfig, LoggingConfig, ResourceCacheConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Every section has defaults, so an empty TOML file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Resource cache policy
    pub cache: ResourceCacheConfig,

    /// Diff rendering
    pub diff: DiffConfig,
}
