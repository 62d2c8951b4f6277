//! Diagnostic Snapshot Source
//!
//! Wraps a [`DiagnosticsCollection`] into a stream of complete snapshots: the
//! current state on subscription, then one full re-read per change
//! notification. Identical consecutive snapshots are not coalesced.

use futures::stream::{self, Stream, StreamExt};
use remedy_domain::ports::infrastructure::DiagnosticsCollection;
use remedy_domain::value_objects::DiagnosticSnapshot;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed stream of diagnostic snapshots
pub type SnapshotStream = Pin<Box<dyn Stream<Item = DiagnosticSnapshot> + Send>>;

/// Snapshot source over a diagnostics collection
#[derive(Clone)]
pub struct DiagnosticSnapshotSource {
    collection: Arc<dyn DiagnosticsCollection>,
}

impl DiagnosticSnapshotSource {
    /// Create a source over `collection`
    pub fn new(collection: Arc<dyn DiagnosticsCollection>) -> Self {
        Self { collection }
    }

    /// Read the current snapshot
    pub fn snapshot(&self) -> DiagnosticSnapshot {
        DiagnosticSnapshot::new(self.collection.entries())
    }

    /// Subscribe to snapshots
    ///
    /// Dropping the stream releases the change subscription; the collection
    /// itself is unaffected.
    pub fn subscribe(&self) -> SnapshotStream {
        // listen before the first read so no mutation falls between them
        let changes = self.collection.changes();
        let initial = self.snapshot();
        let collection = Arc::clone(&self.collection);
        let updates = changes.map(move |()| DiagnosticSnapshot::new(collection.entries()));
        Box::pin(stream::once(async move { initial }).chain(updates))
    }
}

impl std::fmt::Debug for DiagnosticSnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticSnapshotSource").finish_non_exhaustive()
    }
}
