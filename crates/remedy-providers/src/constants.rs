//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in remedy-domain) and infrastructure constants.

// ============================================================================
// CHANGE NOTIFICATION CONSTANTS
// ============================================================================

/// Broadcast buffer of the in-memory diagnostics collection
pub const DIAGNOSTICS_CHANGE_CAPACITY: usize = 256;

/// Broadcast buffer of the settings stores
pub const SETTINGS_CHANGE_CAPACITY: usize = 64;

// ============================================================================
// FETCH TRANSPORT CONSTANTS
// ============================================================================

/// Commit reported by the filesystem transport for keys without a revision
pub const FILESYSTEM_DEFAULT_REVISION: &str = "HEAD";
