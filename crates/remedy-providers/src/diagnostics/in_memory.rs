//! In-memory diagnostics collection
//!
//! Diagnostics providers write into the collection; every mutation is
//! announced on a tokio broadcast channel. Readers take a full copy of the
//! entries on each announcement.
//!
//! ## Example
//!
//! ```ignore
//! use remedy_providers::diagnostics::InMemoryDiagnosticsCollection;
//!
//! let collection = InMemoryDiagnosticsCollection::new();
//! let mut changes = collection.changes();
//! collection.set(key, vec![diagnostic]);
//! changes.next().await;
//! ```

use crate::constants::DIAGNOSTICS_CHANGE_CAPACITY;
use crate::utils::change_stream;
use remedy_domain::ports::infrastructure::{ChangeStream, DiagnosticsCollection};
use remedy_domain::value_objects::{Diagnostic, ResourceKey};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;
use tracing::debug;

type Entries = Vec<(ResourceKey, Vec<Diagnostic>)>;

/// Diagnostics collection held in memory
///
/// Entries keep insertion order; replacing a resource's diagnostics keeps its
/// position.
pub struct InMemoryDiagnosticsCollection {
    entries: RwLock<Entries>,
    sender: broadcast::Sender<()>,
}

impl InMemoryDiagnosticsCollection {
    /// Empty collection with the default notification buffer
    pub fn new() -> Self {
        Self::with_capacity(DIAGNOSTICS_CHANGE_CAPACITY)
    }

    /// Empty collection with a notification buffer of `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            entries: RwLock::new(Vec::new()),
            sender,
        }
    }

    /// Replace the diagnostics held for `resource`
    pub fn set(&self, resource: ResourceKey, diagnostics: Vec<Diagnostic>) {
        {
            let mut entries = self.write();
            match entries.iter_mut().find(|(key, _)| *key == resource) {
                Some((_, held)) => *held = diagnostics,
                None => entries.push((resource, diagnostics)),
            }
        }
        self.notify();
    }

    /// Append one diagnostic to its resource's list
    pub fn push(&self, diagnostic: Diagnostic) {
        {
            let mut entries = self.write();
            match entries
                .iter_mut()
                .find(|(key, _)| *key == diagnostic.resource)
            {
                Some((_, held)) => held.push(diagnostic),
                None => entries.push((diagnostic.resource.clone(), vec![diagnostic])),
            }
        }
        self.notify();
    }

    /// Drop every diagnostic of `resource`
    pub fn remove(&self, resource: &ResourceKey) -> bool {
        let removed = {
            let mut entries = self.write();
            let before = entries.len();
            entries.retain(|(key, _)| key != resource);
            entries.len() != before
        };
        if removed {
            self.notify();
        }
        removed
    }

    /// Drop every diagnostic
    pub fn clear(&self) {
        self.write().clear();
        self.notify();
    }

    /// Announce a change without mutating anything
    pub fn touch(&self) {
        self.notify();
    }

    /// Total number of held diagnostics
    pub fn len(&self) -> usize {
        self.read().iter().map(|(_, d)| d.len()).sum()
    }

    /// Whether no diagnostic is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live change subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn notify(&self) {
        match self.sender.send(()) {
            Ok(count) => debug!("Announced diagnostics change to {} subscribers", count),
            Err(_) => debug!("Diagnostics changed with no subscribers"),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDiagnosticsCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryDiagnosticsCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDiagnosticsCollection")
            .field("diagnostics", &self.len())
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl DiagnosticsCollection for InMemoryDiagnosticsCollection {
    fn entries(&self) -> Vec<(ResourceKey, Vec<Diagnostic>)> {
        self.read().clone()
    }

    fn changes(&self) -> ChangeStream {
        change_stream(self.sender.subscribe())
    }
}
