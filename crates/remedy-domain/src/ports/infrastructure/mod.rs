//! Infrastructure Collaborator Ports
//!
//! Sources of change outside the pipeline: the diagnostics collection and the
//! persisted thread settings.

/// Diagnostics collection port
pub mod diagnostics;
/// Settings store port
pub mod settings;

pub use diagnostics::{ChangeStream, DiagnosticsCollection};
pub use settings::SettingsStore;
