//! Infrastructure layer constants
//!
//! Domain-level constants live in `remedy_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "remedy.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "remedy";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "REMEDY";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "REMEDY_LOG";

/// File stem used for log files when the configured path has none
pub const LOG_FILE_DEFAULT_STEM: &str = "remedy";

// ============================================================================
// DIFF CONSTANTS
// ============================================================================

/// Largest accepted unified diff context radius
pub const DIFF_MAX_CONTEXT_LINES: usize = 100;
