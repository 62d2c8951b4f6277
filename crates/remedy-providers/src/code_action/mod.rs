//! Code Action Provider Adapters
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`FnCodeActionProvider`] | Wraps a synchronous function, optionally limited to file extensions |
//! | [`NullCodeActionProvider`] | Never proposes anything |

pub mod function;
pub mod null;

pub use function::FnCodeActionProvider;
pub use null::NullCodeActionProvider;
