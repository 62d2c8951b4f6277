//! In-memory settings store

use crate::constants::SETTINGS_CHANGE_CAPACITY;
use crate::utils::change_stream;
use remedy_domain::ports::infrastructure::{ChangeStream, SettingsStore};
use remedy_domain::value_objects::ThreadSettings;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

/// Settings held in memory
///
/// Readers get an immutable snapshot; every update swaps the snapshot and
/// announces the change.
pub struct InMemorySettingsStore {
    settings: RwLock<Arc<ThreadSettings>>,
    sender: broadcast::Sender<()>,
}

impl InMemorySettingsStore {
    /// Store holding `settings`
    pub fn new(settings: ThreadSettings) -> Self {
        let (sender, _) = broadcast::channel(SETTINGS_CHANGE_CAPACITY);
        Self {
            settings: RwLock::new(Arc::new(settings)),
            sender,
        }
    }

    /// Replace the settings
    pub fn replace(&self, settings: ThreadSettings) {
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(settings);
        self.notify();
    }

    /// Edit a copy of the settings and store it
    pub fn update<F: FnOnce(&mut ThreadSettings)>(&self, edit: F) {
        {
            let mut guard = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            let mut next = ThreadSettings::clone(&guard);
            edit(&mut next);
            *guard = Arc::new(next);
        }
        self.notify();
    }

    /// Persist the chosen action for a diagnostic
    pub fn set_active_action<D: Into<String>, A: Into<String>>(&self, diagnostic_id: D, action_id: A) {
        let (diagnostic_id, action_id) = (diagnostic_id.into(), action_id.into());
        self.update(|settings| settings.set_active_action(diagnostic_id, action_id));
    }

    /// Forget the chosen action for a diagnostic
    pub fn clear_active_action(&self, diagnostic_id: &str) {
        self.update(|settings| {
            settings.clear_active_action(diagnostic_id);
        });
    }

    fn notify(&self) {
        if self.sender.send(()).is_err() {
            debug!("Settings changed with no subscribers");
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new(ThreadSettings::default())
    }
}

impl std::fmt::Debug for InMemorySettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySettingsStore")
            .field("settings", &self.settings())
            .finish()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn settings(&self) -> Arc<ThreadSettings> {
        Arc::clone(&self.settings.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn changes(&self) -> ChangeStream {
        change_stream(self.sender.subscribe())
    }
}
