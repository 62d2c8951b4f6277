//! # remedy - Provider Implementations
//!
//! Concrete adapters for the ports defined in `remedy-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Resource Cache | `ResourceCacheProvider` | Moka |
//! | Fetch Transport | `ResourceFetcher` | InMemory, FileSystem |
//! | Diagnostics | `DiagnosticsCollection` | InMemory |
//! | Settings | `SettingsStore` | InMemory, JsonFile |
//! | Code Actions | `CodeActionProvider` | Fn, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! remedy-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

pub use remedy_domain::error::{Error, Result};
pub use remedy_domain::ports::infrastructure::{DiagnosticsCollection, SettingsStore};
pub use remedy_domain::ports::providers::{
    CodeActionProvider, ResourceCacheProvider, ResourceFetcher,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Resource cache implementations
///
/// Implements `ResourceCacheProvider` over any `ResourceFetcher`.
pub mod cache;

/// Resource fetch transports
///
/// Implements `ResourceFetcher` for in-memory and on-disk content.
pub mod fetch;

/// Diagnostics collection implementations
pub mod diagnostics;

/// Settings store implementations
pub mod settings;

/// Code action provider adapters
pub mod code_action;

#[cfg(feature = "cache-moka")]
pub use cache::MokaResourceCache;
pub use code_action::{FnCodeActionProvider, NullCodeActionProvider};
pub use diagnostics::InMemoryDiagnosticsCollection;
#[cfg(feature = "fetch-filesystem")]
pub use fetch::FileSystemResourceFetcher;
pub use fetch::InMemoryResourceFetcher;
pub use settings::{InMemorySettingsStore, JsonFileSettingsStore};
