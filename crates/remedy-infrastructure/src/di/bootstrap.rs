//! Pipeline Bootstrap
//!
//! ```text
//! AppConfig ─┐
//! Fetcher ───┼─> MokaResourceCache ─┬─> DiagnosticEnrichment ─┐
//!            │                      └─> EditMaterializer ─────┤
//! Providers ─┴─> CodeActionResolver ──────────────────────────┼─> ChangesetAggregator
//! Diagnostics ─> DiagnosticSnapshotSource ────────────────────┤
//! Settings ───────────────────────────────────────────────────┘
//! ```
//!
//! One cache instance is shared by enrichment and materialization, so a file
//! resolved for a diagnostic is not fetched again when its edit is applied.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let pipeline = PipelineBuilder::new(ConfigLoader::new().load()?)
//!     .with_fetcher(Arc::new(FileSystemResourceFetcher::new().with_repository("app", root)))
//!     .with_diagnostics(collection)
//!     .with_provider(Arc::new(my_provider))
//!     .build()?;
//!
//! let mut subscription = pipeline.subscribe();
//! while let Some(update) = subscription.next().await { /* render */ }
//! ```

use crate::config::{AppConfig, validate_app_config};
use remedy_application::{
    ChangesetAggregator, ChangesetSubscription, CodeActionProviderRegistry, CodeActionResolver,
    DiagnosticEnrichment, DiagnosticSnapshotSource, EditMaterializer,
};
use remedy_domain::error::{Error, Result};
use remedy_domain::events::ChangesetReport;
use remedy_domain::ports::infrastructure::{DiagnosticsCollection, SettingsStore};
use remedy_domain::ports::providers::{
    CodeActionProvider, ResourceCacheProvider, ResourceCacheStats, ResourceFetcher,
};
use remedy_providers::{InMemorySettingsStore, MokaResourceCache};
use std::sync::Arc;
use tracing::info;

/// Builder for a [`ChangesetPipeline`]
///
/// A fetch transport and a diagnostics collection are required. Without a
/// settings store, selections live in an in-memory store that starts empty.
pub struct PipelineBuilder {
    config: AppConfig,
    fetcher: Option<Arc<dyn ResourceFetcher>>,
    diagnostics: Option<Arc<dyn DiagnosticsCollection>>,
    settings: Option<Arc<dyn SettingsStore>>,
    providers: CodeActionProviderRegistry,
}

impl PipelineBuilder {
    /// Start a builder from a configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            fetcher: None,
            diagnostics: None,
            settings: None,
            providers: CodeActionProviderRegistry::new(),
        }
    }

    /// Set the resource fetch transport
    pub fn with_fetcher(mut self, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set the diagnostics collection
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsCollection>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Set the settings store
    pub fn with_settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Append a code action provider; providers are consulted in the order added
    pub fn with_provider(mut self, provider: Arc<dyn CodeActionProvider>) -> Self {
        self.providers.register(provider);
        self
    }

    /// Append several code action providers in order
    pub fn with_providers<I>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn CodeActionProvider>>,
    {
        for provider in providers {
            self.providers.register(provider);
        }
        self
    }

    /// Validate the configuration and wire the pipeline
    pub fn build(self) -> Result<ChangesetPipeline> {
        validate_app_config(&self.config)?;
        let fetcher = self
            .fetcher
            .ok_or_else(|| Error::configuration("A resource fetcher is required"))?;
        let diagnostics = self
            .diagnostics
            .ok_or_else(|| Error::configuration("A diagnostics collection is required"))?;
        let settings = self
            .settings
            .unwrap_or_else(|| Arc::new(InMemorySettingsStore::default()));

        let cache = Arc::new(MokaResourceCache::with_policy(
            fetcher,
            self.config.cache.max_capacity,
            self.config.cache.time_to_live(),
        ));
        let shared_cache: Arc<dyn ResourceCacheProvider> = cache.clone();

        info!(
            cache = shared_cache.provider_name(),
            providers = ?self.providers.names(),
            bounded_cache = self.config.cache.is_bounded(),
            context_lines = self.config.diff.context_lines,
            "Building changeset pipeline"
        );

        let resolver = Arc::new(CodeActionResolver::new(Arc::new(self.providers)));
        let materializer = Arc::new(
            EditMaterializer::new(Arc::clone(&shared_cache))
                .with_context_lines(self.config.diff.context_lines),
        );
        let aggregator = ChangesetAggregator::new(
            DiagnosticSnapshotSource::new(diagnostics),
            DiagnosticEnrichment::new(shared_cache),
            resolver.clone(),
            materializer.clone(),
            Arc::clone(&settings),
        );

        Ok(ChangesetPipeline {
            config: Arc::new(self.config),
            cache,
            settings,
            resolver,
            materializer,
            aggregator,
        })
    }
}

impl std::fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("config", &self.config)
            .field("has_fetcher", &self.fetcher.is_some())
            .field("has_diagnostics", &self.diagnostics.is_some())
            .field("has_settings", &self.settings.is_some())
            .field("providers", &self.providers)
            .finish()
    }
}

/// A wired changeset pipeline
#[derive(Clone)]
pub struct ChangesetPipeline {
    config: Arc<AppConfig>,
    cache: Arc<MokaResourceCache>,
    settings: Arc<dyn SettingsStore>,
    resolver: Arc<CodeActionResolver>,
    materializer: Arc<EditMaterializer>,
    aggregator: ChangesetAggregator,
}

impl ChangesetPipeline {
    /// Start a live subscription; must be called within a tokio runtime
    pub fn subscribe(&self) -> ChangesetSubscription {
        self.aggregator.subscribe()
    }

    /// Aggregate the current diagnostics once
    pub async fn compute(&self) -> Result<ChangesetReport> {
        self.aggregator.compute().await
    }

    /// Resource cache statistics
    pub async fn cache_stats(&self) -> ResourceCacheStats {
        self.cache.stats().await
    }

    /// Get the configuration the pipeline was built with
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Get the shared resource cache
    pub fn cache(&self) -> Arc<MokaResourceCache> {
        Arc::clone(&self.cache)
    }

    /// Get the settings store
    pub fn settings(&self) -> Arc<dyn SettingsStore> {
        Arc::clone(&self.settings)
    }

    /// Get the code action resolver
    pub fn resolver(&self) -> Arc<CodeActionResolver> {
        Arc::clone(&self.resolver)
    }

    /// Get the edit materializer
    pub fn materializer(&self) -> Arc<EditMaterializer> {
        Arc::clone(&self.materializer)
    }

    /// Get the aggregator
    pub fn aggregator(&self) -> &ChangesetAggregator {
        &self.aggregator
    }
}

impl std::fmt::Debug for ChangesetPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangesetPipeline")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
