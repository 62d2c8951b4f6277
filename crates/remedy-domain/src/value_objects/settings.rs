//! Persisted thread settings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings read by the pipeline
///
/// `actions` maps a diagnostic identity to the identity of the code action the
/// user chose for it. A missing entry means "use the default action".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSettings {
    /// Diagnostic identity -> chosen code action identity
    #[serde(default)]
    pub actions: HashMap<String, String>,
}

impl ThreadSettings {
    /// Empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set_active_action`]
    pub fn with_active_action<D: Into<String>, A: Into<String>>(
        mut self,
        diagnostic_id: D,
        action_id: A,
    ) -> Self {
        self.set_active_action(diagnostic_id, action_id);
        self
    }

    /// Record the chosen action for a diagnostic
    pub fn set_active_action<D: Into<String>, A: Into<String>>(
        &mut self,
        diagnostic_id: D,
        action_id: A,
    ) {
        self.actions.insert(diagnostic_id.into(), action_id.into());
    }

    /// Forget the chosen action for a diagnostic
    pub fn clear_active_action(&mut self, diagnostic_id: &str) -> Option<String> {
        self.actions.remove(diagnostic_id)
    }

    /// The chosen action identity for a diagnostic, if any
    pub fn active_action(&self, diagnostic_id: &str) -> Option<&str> {
        self.actions.get(diagnostic_id).map(String::as_str)
    }
}
