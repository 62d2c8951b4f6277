//! Domain Services
//!
//! Pure functions over domain values. No I/O, no async.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`select_active`] | Deterministic choice of a diagnostic's active code action |
//! | [`apply_edits`] | Applies text operations to one resource's content |
//! | [`file_diff`] | Unified diff between original and edited content |

/// Unified diff computation
pub mod diff;
/// Text edit application
pub mod edit;
/// Active action selection
pub mod selection;

pub use diff::file_diff;
pub use edit::apply_edits;
pub use selection::select_active;
