//! Diff configuration types

use remedy_domain::constants::DIFF_DEFAULT_CONTEXT_LINES;
use serde::{Deserialize, Serialize};

/// Diff rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Unchanged lines shown around each hunk
    pub context_lines: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_lines: DIFF_DEFAULT_CONTEXT_LINES,
        }
    }
}
