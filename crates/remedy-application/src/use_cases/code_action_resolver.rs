//! Code Action Resolver
//!
//! Queries every registered provider that handles a diagnostic's document.
//! Provider failures are isolated: the other providers' actions are kept and
//! the failure is reported alongside them.

use crate::ports::registry::CodeActionProviderRegistry;
use crate::ports::services::CodeActionResolverInterface;
use async_trait::async_trait;
use futures::future::join_all;
use remedy_domain::error::{Error, Result};
use remedy_domain::ports::providers::{CodeActionContext, TextDocument};
use remedy_domain::value_objects::{CodeAction, EnrichedDiagnostic};
use std::sync::Arc;
use tracing::{debug, warn};

/// Actions resolved for one diagnostic, plus any provider failures
#[derive(Debug, Clone, Default)]
pub struct ResolvedActions {
    /// Actions in provider registration order, then provider order
    pub actions: Vec<CodeAction>,
    /// One `Provider` error per failed provider
    pub failures: Vec<Error>,
}

impl ResolvedActions {
    /// Whether every provider succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The actions, or the failure if any provider failed
    pub fn into_result(mut self) -> Result<Vec<CodeAction>> {
        match self.failures.len() {
            0 => Ok(self.actions),
            1 => Err(self.failures.remove(0)),
            _ => Err(Error::aggregate(self.failures)),
        }
    }
}

/// Resolver over an ordered provider registry
#[derive(Debug, Clone)]
pub struct CodeActionResolver {
    registry: Arc<CodeActionProviderRegistry>,
}

impl CodeActionResolver {
    /// Create a resolver over `registry`
    pub fn new(registry: Arc<CodeActionProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Query all handling providers concurrently, keeping registration order
    pub async fn resolve(&self, diagnostic: &EnrichedDiagnostic) -> ResolvedActions {
        if diagnostic.entry().is_directory {
            return ResolvedActions::default();
        }
        let document = TextDocument::for_diagnostic(diagnostic);
        let context = CodeActionContext {
            diagnostics: vec![diagnostic.diagnostic().clone()],
        };
        let range = diagnostic.range;

        let providers: Vec<_> = self
            .registry
            .providers()
            .iter()
            .filter(|provider| provider.handles(&document))
            .collect();
        let results = join_all(
            providers
                .iter()
                .map(|provider| provider.provide_code_actions(&document, range, &context)),
        )
        .await;

        let mut resolved = ResolvedActions::default();
        for (provider, result) in providers.iter().zip(results) {
            let name = provider.provider_name();
            match result {
                Ok(actions) => {
                    debug!(provider = name, actions = actions.len(), "Provider returned actions");
                    resolved.actions.extend(actions);
                }
                Err(e) => {
                    warn!(
                        provider = name,
                        diagnostic = %diagnostic.identity(),
                        error = %e,
                        "Code action provider failed"
                    );
                    resolved.failures.push(match e {
                        Error::Provider { .. } => e,
                        other => Error::provider(name, other.to_string()),
                    });
                }
            }
        }
        resolved
    }
}

#[async_trait]
impl CodeActionResolverInterface for CodeActionResolver {
    async fn get_actions(&self, diagnostic: &EnrichedDiagnostic) -> Result<Vec<CodeAction>> {
        self.resolve(diagnostic).await.into_result()
    }
}
