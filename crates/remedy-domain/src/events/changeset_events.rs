//! Changeset pipeline states
//!
//! The aggregator publishes one [`ChangesetUpdate`] per state transition. Each
//! update carries the generation of the computation it belongs to, so a
//! consumer can tell which trigger a result was derived from.

use crate::error::Error;
use crate::value_objects::diff::Changeset;
use serde::{Deserialize, Serialize};

/// What happened to one diagnostic during an aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticOutcome {
    /// Diagnostic identity key
    pub diagnostic_id: String,
    /// Identity of the active code action, if any action was available
    pub active_action: Option<String>,
    /// Number of file diffs the active action produced
    pub file_diffs: usize,
}

/// Result of one successful aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesetReport {
    /// One changeset per changed resource, first-seen resource order
    pub changesets: Vec<Changeset>,
    /// One outcome per enriched diagnostic, source order
    pub outcomes: Vec<DiagnosticOutcome>,
}

impl ChangesetReport {
    /// Whether no resource changes
    pub fn is_empty(&self) -> bool {
        self.changesets.is_empty()
    }
}

/// State of a changeset subscription
///
/// ```text
/// Computing(N) -> Ready(N) | Failed(N)
///      ^                |
///      +-- trigger N+1 -+
/// ```
#[derive(Debug, Clone)]
pub enum ChangesetState {
    /// An aggregation is in flight
    Computing,
    /// The aggregation finished
    Ready(ChangesetReport),
    /// The aggregation failed as a whole
    Failed(Error),
}

impl ChangesetState {
    /// Whether this state settles a computation
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// The report, when ready
    pub fn report(&self) -> Option<&ChangesetReport> {
        match self {
            Self::Ready(report) => Some(report),
            _ => None,
        }
    }

    /// The error, when failed
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Short state name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Computing => "computing",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

/// A state transition tagged with its computation generation
#[derive(Debug, Clone)]
pub struct ChangesetUpdate {
    /// Monotonically increasing per subscription, starting at 1
    pub generation: u64,
    /// The new state
    pub state: ChangesetState,
}
