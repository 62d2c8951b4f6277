//! Diagnostic Enrichment
//!
//! Joins every diagnostic of a snapshot to the resolved entry of its resource.

use futures::future::try_join_all;
use remedy_domain::error::{Error, Result};
use remedy_domain::ports::providers::ResourceCacheProvider;
use remedy_domain::value_objects::{DiagnosticSnapshot, EnrichedDiagnostic, ResourceKey};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Enrichment stage backed by the shared resource cache
#[derive(Debug, Clone)]
pub struct DiagnosticEnrichment {
    cache: Arc<dyn ResourceCacheProvider>,
}

impl DiagnosticEnrichment {
    /// Create the stage over `cache`
    pub fn new(cache: Arc<dyn ResourceCacheProvider>) -> Self {
        Self { cache }
    }

    /// Enrich every diagnostic of `snapshot`, all or nothing
    ///
    /// Each distinct resource is resolved once. The first resolution failure
    /// fails the whole snapshot. Output keeps source diagnostic order.
    pub async fn enrich(&self, snapshot: &DiagnosticSnapshot) -> Result<Vec<EnrichedDiagnostic>> {
        let mut keys: Vec<&ResourceKey> = Vec::new();
        for diagnostic in snapshot.diagnostics() {
            if !keys.contains(&&diagnostic.resource) {
                keys.push(&diagnostic.resource);
            }
        }
        debug!(
            diagnostics = snapshot.len(),
            resources = keys.len(),
            "Enriching snapshot"
        );

        let entries = try_join_all(keys.iter().map(|key| self.cache.resolve(key))).await?;
        let resolved: HashMap<&ResourceKey, _> = keys.into_iter().zip(entries).collect();

        snapshot
            .diagnostics()
            .map(|diagnostic| {
                let entry = resolved.get(&diagnostic.resource).cloned().ok_or_else(|| {
                    Error::internal(format!("no entry resolved for {}", diagnostic.resource))
                })?;
                EnrichedDiagnostic::new(diagnostic.clone(), entry)
            })
            .collect()
    }
}
