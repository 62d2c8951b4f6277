//! Diagnostic snapshots

use crate::value_objects::diagnostic::Diagnostic;
use crate::value_objects::resource::ResourceKey;
use serde::{Deserialize, Serialize};

/// The complete diagnostics state at one point in time
///
/// Entries keep the order of the underlying collection; diagnostics keep
/// their order within each entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSnapshot {
    entries: Vec<(ResourceKey, Vec<Diagnostic>)>,
}

impl DiagnosticSnapshot {
    /// Snapshot from collection entries
    pub fn new(entries: Vec<(ResourceKey, Vec<Diagnostic>)>) -> Self {
        Self { entries }
    }

    /// Per-resource diagnostic lists
    pub fn entries(&self) -> &[(ResourceKey, Vec<Diagnostic>)] {
        &self.entries
    }

    /// All diagnostics in source order
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().flat_map(|(_, diagnostics)| diagnostics.iter())
    }

    /// Total number of diagnostics
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, d)| d.len()).sum()
    }

    /// Whether the snapshot holds no diagnostic
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
