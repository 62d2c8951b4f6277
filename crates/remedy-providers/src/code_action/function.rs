//! Function-backed code action provider
//!
//! Adapts a plain function into a [`CodeActionProvider`]. Handy for embedding
//! simple rule-based fixes without writing a provider type.
//!
//! ## Example
//!
//! ```ignore
//! let provider = FnCodeActionProvider::new("gofmt", |document, range, context| {
//!     Ok(vec![CodeAction::new("Format file")])
//! })
//! .for_extensions(["go"]);
//! ```

use async_trait::async_trait;
use remedy_domain::error::Result;
use remedy_domain::ports::providers::{CodeActionContext, CodeActionProvider, TextDocument};
use remedy_domain::value_objects::{CodeAction, Range};

type ProvideFn =
    dyn Fn(&TextDocument, Range, &CodeActionContext) -> Result<Vec<CodeAction>> + Send + Sync;

/// Code action provider backed by a function
pub struct FnCodeActionProvider {
    name: String,
    extensions: Option<Vec<String>>,
    provide: Box<ProvideFn>,
}

impl FnCodeActionProvider {
    /// Provider named `name` answering with `provide`
    pub fn new<N, F>(name: N, provide: F) -> Self
    where
        N: Into<String>,
        F: Fn(&TextDocument, Range, &CodeActionContext) -> Result<Vec<CodeAction>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            extensions: None,
            provide: Box::new(provide),
        }
    }

    /// Only handle documents with one of these extensions (case-insensitive)
    pub fn for_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        );
        self
    }
}

impl std::fmt::Debug for FnCodeActionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCodeActionProvider")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CodeActionProvider for FnCodeActionProvider {
    fn handles(&self, document: &TextDocument) -> bool {
        match &self.extensions {
            None => true,
            Some(extensions) => document
                .extension()
                .is_some_and(|ext| extensions.contains(&ext)),
        }
    }

    async fn provide_code_actions(
        &self,
        document: &TextDocument,
        range: Range,
        context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>> {
        (self.provide)(document, range, context)
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}
