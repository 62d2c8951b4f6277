//! Edit Materializer
//!
//! Resolves each resource a code action edits, applies the edit to its
//! content and diffs the result against the original.

use crate::domain_services::{apply_edits, file_diff};
use crate::ports::services::EditMaterializerInterface;
use async_trait::async_trait;
use futures::future::try_join_all;
use remedy_domain::constants::DIFF_DEFAULT_CONTEXT_LINES;
use remedy_domain::error::Result;
use remedy_domain::ports::providers::ResourceCacheProvider;
use remedy_domain::value_objects::{CodeAction, FileDiff, ResourceEdit};
use std::sync::Arc;
use tracing::debug;

/// Materializer backed by the shared resource cache
#[derive(Debug, Clone)]
pub struct EditMaterializer {
    cache: Arc<dyn ResourceCacheProvider>,
    context_lines: usize,
}

impl EditMaterializer {
    /// Create a materializer with the default diff context
    pub fn new(cache: Arc<dyn ResourceCacheProvider>) -> Self {
        Self {
            cache,
            context_lines: DIFF_DEFAULT_CONTEXT_LINES,
        }
    }

    /// Set the number of unchanged lines around each hunk
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    async fn materialize_resource(&self, edit: &ResourceEdit) -> Result<Option<FileDiff>> {
        let entry = self.cache.resolve(&edit.resource).await?;
        let original = entry.text()?;
        let modified = apply_edits(&edit.resource, original, &edit.operations)?;
        let diff = file_diff(&entry, original, &modified, self.context_lines);
        debug!(
            resource = %edit.resource,
            operations = edit.operations.len(),
            changed = diff.is_some(),
            "Materialized resource edit"
        );
        Ok(diff)
    }
}

#[async_trait]
impl EditMaterializerInterface for EditMaterializer {
    async fn materialize(&self, action: &CodeAction) -> Result<Vec<FileDiff>> {
        let edit = match action.edit.as_ref() {
            Some(edit) if action.has_edit() => edit,
            _ => {
                debug!(action = action.identity(), "Action carries no edit");
                return Ok(Vec::new());
            }
        };
        let diffs = try_join_all(
            edit.resource_edits()
                .iter()
                .map(|resource_edit| self.materialize_resource(resource_edit)),
        )
        .await?;
        Ok(diffs.into_iter().flatten().collect())
    }
}
