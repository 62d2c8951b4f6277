//! Null code action provider

use async_trait::async_trait;
use remedy_domain::error::Result;
use remedy_domain::ports::providers::{CodeActionContext, CodeActionProvider, TextDocument};
use remedy_domain::value_objects::{CodeAction, Range};
use std::sync::Arc;

/// Provider that proposes no action for any document
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCodeActionProvider;

impl NullCodeActionProvider {
    /// Create a new null provider
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl CodeActionProvider for NullCodeActionProvider {
    async fn provide_code_actions(
        &self,
        _document: &TextDocument,
        _range: Range,
        _context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
