//! Code Action Provider Registry

use remedy_domain::ports::providers::CodeActionProvider;
use std::fmt;
use std::sync::Arc;

/// Ordered collection of code action providers
#[derive(Clone, Default)]
pub struct CodeActionProviderRegistry {
    providers: Vec<Arc<dyn CodeActionProvider>>,
}

impl CodeActionProviderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider after every provider registered so far
    pub fn register(&mut self, provider: Arc<dyn CodeActionProvider>) {
        self.providers.push(provider);
    }

    /// Builder form of [`Self::register`]
    pub fn with_provider(mut self, provider: Arc<dyn CodeActionProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Providers in registration order
    pub fn providers(&self) -> &[Arc<dyn CodeActionProvider>] {
        &self.providers
    }

    /// Provider names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_name()).collect()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FromIterator<Arc<dyn CodeActionProvider>> for CodeActionProviderRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn CodeActionProvider>>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for CodeActionProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeActionProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
