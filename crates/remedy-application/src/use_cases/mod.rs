//! Use Cases
//!
//! One module per pipeline stage.

pub mod changeset_aggregator;
pub mod code_action_resolver;
pub mod edit_materializer;
pub mod enrichment;
pub mod snapshot_source;

pub use changeset_aggregator::{ChangesetAggregator, ChangesetSubscription};
pub use code_action_resolver::{CodeActionResolver, ResolvedActions};
pub use edit_materializer::EditMaterializer;
pub use enrichment::DiagnosticEnrichment;
pub use snapshot_source::{DiagnosticSnapshotSource, SnapshotStream};
