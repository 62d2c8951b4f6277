//! # Domain Layer - remedy
//!
//! Core types and contracts for turning a live collection of diagnostics into
//! the set of file-level changesets proposed by their code actions.
//!
//! ## Contents
//!
//! - [`value_objects`]: resource keys and entries, diagnostics, code actions,
//!   workspace edits, file diffs, changesets and thread settings
//! - [`ports`]: traits for every external collaborator (fetch transport,
//!   resource cache, code action providers, diagnostics collection, settings)
//! - [`events`]: the states published to presentation consumers
//! - [`error`]: the error taxonomy shared by every layer
//!
//! The domain crate has no runtime dependency: it defines contracts, the
//! application crate orchestrates them and the providers crate implements them.

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::{ChangesetReport, ChangesetState, ChangesetUpdate, DiagnosticOutcome};
pub use value_objects::*;
