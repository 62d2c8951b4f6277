//! Pipeline Stage Interfaces
//!
//! The aggregator depends on these traits rather than on the concrete use
//! cases, so each stage can be replaced or instrumented independently.

use async_trait::async_trait;
use remedy_domain::error::Result;
use remedy_domain::value_objects::{CodeAction, EnrichedDiagnostic, FileDiff};

/// Resolves the code actions applicable to one diagnostic
#[async_trait]
pub trait CodeActionResolverInterface: Send + Sync {
    /// Actions from every handling provider, in registration order
    ///
    /// Fails if any provider failed for this diagnostic.
    async fn get_actions(&self, diagnostic: &EnrichedDiagnostic) -> Result<Vec<CodeAction>>;
}

/// Materializes a code action's edit into per-file diffs
#[async_trait]
pub trait EditMaterializerInterface: Send + Sync {
    /// One diff per touched resource whose text actually changes
    async fn materialize(&self, action: &CodeAction) -> Result<Vec<FileDiff>>;
}
