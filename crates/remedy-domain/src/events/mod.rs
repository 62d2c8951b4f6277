//! Pipeline Events
//!
//! States published by the changeset aggregator to presentation consumers.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChangesetState`] | `Computing`, `Ready` or `Failed` |
//! | [`ChangesetUpdate`] | A state tagged with its generation |
//! | [`ChangesetReport`] | Payload of `Ready` |

/// Changeset state definitions
pub mod changeset_events;

pub use changeset_events::{ChangesetReport, ChangesetState, ChangesetUpdate, DiagnosticOutcome};
