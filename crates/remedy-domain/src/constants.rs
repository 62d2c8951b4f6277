//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `remedy_infrastructure::constants`.

// ============================================================================
// RESOURCE KEY CONSTANTS
// ============================================================================

/// URI scheme of canonical resource keys
pub const RESOURCE_KEY_SCHEME: &str = "git://";

/// Separator between the repository and the revision in a resource key
pub const RESOURCE_KEY_REV_SEPARATOR: char = '?';

/// Separator between the repository/revision and the file path in a resource key
pub const RESOURCE_KEY_PATH_SEPARATOR: char = '#';

// ============================================================================
// DIFF CONSTANTS
// ============================================================================

/// Default number of unchanged context lines around each diff hunk
pub const DIFF_DEFAULT_CONTEXT_LINES: usize = 3;

/// Marker emitted after a diff line that has no trailing newline
pub const DIFF_NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

// ============================================================================
// CHANGESET SUBSCRIPTION CONSTANTS
// ============================================================================

/// Updates a changeset subscription buffers before its driver waits for the subscriber
pub const CHANGESET_UPDATE_BUFFER: usize = 16;
