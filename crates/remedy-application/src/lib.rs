//! Application Layer - remedy
//!
//! Turns a live diagnostics collection into the changesets proposed by the
//! diagnostics' active code actions.
//!
//! ## Architecture
//!
//! The application layer:
//! - Orchestrates the pipeline stages over the domain ports
//! - Holds the pure domain services (action selection, edit application, diffing)
//! - Has no dependency on concrete adapters; they are injected at construction
//!
//! ## Pipeline
//!
//! ```text
//! DiagnosticsCollection -> DiagnosticSnapshotSource -> DiagnosticEnrichment
//!     -> CodeActionResolver -> select_active -> EditMaterializer
//!     -> ChangesetAggregator -> ChangesetSubscription
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `remedy-domain`: value objects, errors and port traits
//! - Pure Rust libraries for async, diffing and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
