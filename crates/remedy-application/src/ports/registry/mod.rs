//! Provider Registries
//!
//! Providers are passed in explicitly by the composition root. Registration
//! order is part of the observable behavior: it is the order actions are
//! merged in and therefore the order the default selection picks from.

/// Code action provider registry
pub mod code_action;

pub use code_action::CodeActionProviderRegistry;
