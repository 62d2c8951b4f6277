//! Application Ports
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Explicit, ordered collections of injected providers |
//! | [`services`] | Interfaces of the pipeline stages the aggregator composes |

/// Provider registries
pub mod registry;
/// Pipeline stage interfaces
pub mod services;

pub use registry::CodeActionProviderRegistry;
pub use services::{CodeActionResolverInterface, EditMaterializerInterface};
