//! Diagnostics Collection Port
//!
//! The live, mutable collection diagnostics providers publish into. The
//! pipeline only reads it: a full read whenever the collection reports a
//! change.

use crate::value_objects::{Diagnostic, ResourceKey};
use futures::Stream;
use std::pin::Pin;

/// Boxed stream of change notifications
///
/// Notifications carry no payload; consumers re-read the source on each item.
pub type ChangeStream = Pin<Box<dyn Stream<Item = ()> + Send>>;

/// Diagnostics collection interface
pub trait DiagnosticsCollection: Send + Sync {
    /// Current per-resource diagnostic lists, in collection order
    fn entries(&self) -> Vec<(ResourceKey, Vec<Diagnostic>)>;

    /// One notification per mutation of the collection
    ///
    /// The stream ends when the collection is dropped.
    fn changes(&self) -> ChangeStream;
}
