//! Value objects
//!
//! Immutable data carried through the pipeline. Everything here is recomputed
//! rather than mutated when inputs change.

pub mod code_action;
pub mod diagnostic;
pub mod diff;
pub mod resource;
pub mod settings;
pub mod snapshot;

pub use code_action::{CodeAction, Command, ResourceEdit, TextEditOperation, WorkspaceEdit};
pub use diagnostic::{Diagnostic, DiagnosticSeverity, EnrichedDiagnostic, Position, Range};
pub use diff::{Changeset, FileDiff, Hunk, collect_changesets};
pub use resource::{ResourceEntry, ResourceKey};
pub use settings::ThreadSettings;
pub use snapshot::DiagnosticSnapshot;
