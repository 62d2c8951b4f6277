//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the pipeline and its external
//! collaborators. The application layer depends only on these traits; the
//! providers crate implements them.
//!
//! ## Organization
//!
//! - **providers/** - fetch transport, resource cache and code action providers
//! - **infrastructure/** - the diagnostics collection and the settings store

/// Infrastructure collaborator ports
pub mod infrastructure;
/// External provider ports
pub mod providers;

pub use infrastructure::{ChangeStream, DiagnosticsCollection, SettingsStore};
pub use providers::{
    CodeActionContext, CodeActionProvider, ResourceCacheProvider, ResourceCacheStats,
    ResourceFetcher, TextDocument,
};
