//! JSON file settings store
//!
//! Reads `{"actions": {"<diagnostic id>": "<action id>"}}` from a file. A
//! missing file means empty settings. [`JsonFileSettingsStore::reload`]
//! re-reads the file and announces a change.

use super::in_memory::InMemorySettingsStore;
use remedy_domain::error::{Error, Result};
use remedy_domain::ports::infrastructure::{ChangeStream, SettingsStore};
use remedy_domain::value_objects::ThreadSettings;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Settings loaded from a JSON file
#[derive(Debug)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    inner: InMemorySettingsStore,
}

impl JsonFileSettingsStore {
    /// Load the settings file at `path`
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let settings = Self::read(&path)?;
        Ok(Self {
            path,
            inner: InMemorySettingsStore::new(settings),
        })
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file and announce the change
    pub fn reload(&self) -> Result<()> {
        let settings = Self::read(&self.path)?;
        info!(path = %self.path.display(), selections = settings.actions.len(), "Settings reloaded");
        self.inner.replace(settings);
        Ok(())
    }

    fn read(path: &Path) -> Result<ThreadSettings> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                Error::configuration_with_source(
                    format!("invalid settings file {}", path.display()),
                    e,
                )
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ThreadSettings::default()),
            Err(e) => Err(Error::io_with_source(
                format!("failed to read settings file {}", path.display()),
                e,
            )),
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn settings(&self) -> Arc<ThreadSettings> {
        self.inner.settings()
    }

    fn changes(&self) -> ChangeStream {
        self.inner.changes()
    }
}
