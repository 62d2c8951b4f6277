//! Configuration
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AppConfig`] | Root configuration |
//! | [`LoggingConfig`] | Level, format and file output |
//! | [`ResourceCacheConfig`] | Optional capacity and time-to-live |
//! | [`DiffConfig`] | Unified diff context radius |
//! | [`ConfigLoader`] | Defaults, TOML file and environment merge |

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::*;
