//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | ResourceFetcher | The sole I/O boundary for file content and metadata |
//! | ResourceCacheProvider | Memoized, single-flight resolution of resource keys |
//! | CodeActionProvider | Remediation actions for one diagnostic |

/// Code action provider port
pub mod code_action;
/// Resource cache port
pub mod resource_cache;
/// Resource fetch transport port
pub mod resource_fetch;

pub use code_action::{CodeActionContext, CodeActionProvider, TextDocument};
pub use resource_cache::{ResourceCacheProvider, ResourceCacheStats};
pub use resource_fetch::ResourceFetcher;
