//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the changeset pipeline.
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `REMEDY_` environment |
//! | [`di`] | Composition root wiring adapters into a [`di::ChangesetPipeline`] |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{ChangesetPipeline, PipelineBuilder};
pub use error_ext::ErrorContext;
