//! Composition root
//!
//! Adapters are wired explicitly: the caller hands over the external
//! collaborators, the builder creates the shared resource cache and the
//! pipeline stages around it.

pub mod bootstrap;

pub use bootstrap::{ChangesetPipeline, PipelineBuilder};
