//! Code Action Provider Port
//!
//! Providers propose remediations for diagnostics. They are handed a document
//! built from the diagnostic's resolved entry, the diagnostic's range and a
//! context holding the diagnostic itself.

use crate::error::Result;
use crate::value_objects::{CodeAction, Diagnostic, EnrichedDiagnostic, Range, ResourceKey};
use async_trait::async_trait;

/// The document a provider is asked about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    /// File pinned at the resolved commit of its entry
    pub uri: ResourceKey,
    /// File path within the repository
    pub path: String,
    /// File content, when the entry is a regular file
    pub text: Option<String>,
}

impl TextDocument {
    /// Document for an enriched diagnostic's entry
    pub fn for_diagnostic(diagnostic: &EnrichedDiagnostic) -> Self {
        let entry = diagnostic.entry();
        Self {
            uri: entry.commit_key(),
            path: entry.path.clone(),
            text: entry.content.clone(),
        }
    }

    /// Lower-cased file extension, if any
    pub fn extension(&self) -> Option<String> {
        let name = self.path.rsplit('/').next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        (!stem.is_empty()).then(|| ext.to_ascii_lowercase())
    }
}

/// Context of a code action request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeActionContext {
    /// Diagnostics the actions should address
    pub diagnostics: Vec<Diagnostic>,
}

/// Code action provider interface
///
/// Providers are invoked in registration order; an error from one provider
/// does not suppress the results of the others.
#[async_trait]
pub trait CodeActionProvider: Send + Sync {
    /// Whether this provider handles `document` (default: every document)
    fn handles(&self, _document: &TextDocument) -> bool {
        true
    }

    /// Actions applicable to `range` of `document`
    async fn provide_code_actions(
        &self,
        document: &TextDocument,
        range: Range,
        context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>>;

    /// Get the name/identifier of this provider
    fn provider_name(&self) -> &str;
}
