//! # remedy
//!
//! Computes, incrementally and asynchronously, the file-level changesets that
//! follow from a live set of diagnostics, the code actions proposed for them
//! and the user's persisted choice of active action per diagnostic.
//!
//! ## Example
//!
//! ```ignore
//! use remedy::{AppConfig, PipelineBuilder};
//! use remedy::providers::{FileSystemResourceFetcher, InMemoryDiagnosticsCollection};
//!
//! let diagnostics = Arc::new(InMemoryDiagnosticsCollection::new());
//! let pipeline = PipelineBuilder::new(AppConfig::default())
//!     .with_fetcher(Arc::new(FileSystemResourceFetcher::new().with_repository("app", "/src/app")))
//!     .with_diagnostics(diagnostics.clone())
//!     .with_provider(Arc::new(goimports))
//!     .build()?;
//!
//! let mut subscription = pipeline.subscribe();
//! while let Some(update) = subscription.next().await {
//!     match update.state {
//!         ChangesetState::Computing => show_spinner(),
//!         ChangesetState::Ready(report) => render(&report.changesets),
//!         ChangesetState::Failed(error) => show_error(&error),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, errors, pipeline states and port traits
//! - `application` - the pipeline stages and the changeset aggregator
//! - `providers` - adapters for caching, fetching, diagnostics and settings
//! - `infrastructure` - configuration, logging and the composition root

/// Domain layer - value objects, errors and ports
pub mod domain {
    pub use remedy_domain::*;
}

/// Application layer - pipeline stages
pub mod application {
    pub use remedy_application::*;
}

/// Provider implementations
pub mod providers {
    pub use remedy_providers::*;
}

/// Infrastructure layer - config, logging and composition root
pub mod infrastructure {
    pub use remedy_infrastructure::*;
}

pub use domain::*;

pub use application::{ChangesetAggregator, ChangesetSubscription};
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::di::{ChangesetPipeline, PipelineBuilder};
pub use infrastructure::logging::init_logging;
