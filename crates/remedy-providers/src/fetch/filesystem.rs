//! Filesystem fetch transport
//!
//! Maps each repository name to a checked-out working tree and reads key
//! paths beneath it. The working tree is taken as-is: the key's revision is
//! reported as the entry's commit, or `HEAD` when the key has none.

use crate::constants::FILESYSTEM_DEFAULT_REVISION;
use async_trait::async_trait;
use remedy_domain::error::{Error, Result};
use remedy_domain::ports::providers::ResourceFetcher;
use remedy_domain::value_objects::{ResourceEntry, ResourceKey};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Filesystem fetch transport
#[derive(Debug, Clone, Default)]
pub struct FileSystemResourceFetcher {
    roots: HashMap<String, PathBuf>,
}

impl FileSystemResourceFetcher {
    /// Transport with no repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve repository `name` from the working tree at `root`
    pub fn with_repository<N: Into<String>, P: Into<PathBuf>>(mut self, name: N, root: P) -> Self {
        self.roots.insert(name.into(), root.into());
        self
    }

    /// Root directory of repository `name`
    pub fn root(&self, name: &str) -> Option<&Path> {
        self.roots.get(name).map(PathBuf::as_path)
    }

    fn map_io(key: &ResourceKey, error: &std::io::Error) -> Error {
        match error.kind() {
            ErrorKind::NotFound => Error::resource_not_found(key.as_str()),
            _ => Error::resource_fetch(key.as_str(), error.to_string()),
        }
    }
}

#[async_trait]
impl ResourceFetcher for FileSystemResourceFetcher {
    async fn fetch(&self, key: &ResourceKey) -> Result<ResourceEntry> {
        let root = self
            .roots
            .get(key.repo())
            .ok_or_else(|| Error::resource_not_found(key.as_str()))?;
        let relative = Path::new(key.path());
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::resource_fetch(
                key.as_str(),
                "path escapes the repository root",
            ));
        }

        let path = root.join(relative);
        let canonical_root = tokio::fs::canonicalize(root)
            .await
            .map_err(|e| Error::resource_fetch(key.as_str(), e.to_string()))?;
        let canonical = tokio::fs::canonicalize(&path)
            .await
            .map_err(|e| Self::map_io(key, &e))?;
        if !canonical.starts_with(&canonical_root) {
            return Err(Error::resource_fetch(
                key.as_str(),
                "path escapes the repository root",
            ));
        }

        let commit = key.rev().unwrap_or(FILESYSTEM_DEFAULT_REVISION);
        let metadata = tokio::fs::metadata(&canonical)
            .await
            .map_err(|e| Self::map_io(key, &e))?;
        debug!(resource = %key, path = %canonical.display(), "Reading resource from disk");
        if metadata.is_dir() {
            return Ok(ResourceEntry::directory(key.clone(), commit));
        }
        let content = tokio::fs::read_to_string(&canonical)
            .await
            .map_err(|e| Self::map_io(key, &e))?;
        Ok(ResourceEntry::file(key.clone(), commit, content))
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
