//! Resource value objects
//!
//! A [`ResourceKey`] names a file at a revision of a repository. It is the
//! identity used by the resource cache, by diagnostics and by workspace edits.
//! A [`ResourceEntry`] is the metadata resolved for a key.

use crate::constants::{
    RESOURCE_KEY_PATH_SEPARATOR, RESOURCE_KEY_REV_SEPARATOR, RESOURCE_KEY_SCHEME,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Canonical identity of a versioned file (repository + revision + path)
///
/// Formats as `git://{repo}?{rev}#{path}`; the `?{rev}` part is omitted when
/// no revision is given. Two keys are equal iff their canonical strings are
/// equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKey {
    repo: String,
    rev: Option<String>,
    path: String,
    canonical: String,
}

impl ResourceKey {
    /// Create a key for `path` at `rev` in `repo`
    pub fn new<R: Into<String>, P: Into<String>>(repo: R, rev: Option<&str>, path: P) -> Self {
        let repo = repo.into();
        let rev = rev.filter(|r| !r.is_empty()).map(str::to_string);
        let path = path.into().trim_start_matches('/').to_string();
        let canonical = match &rev {
            Some(rev) => format!(
                "{RESOURCE_KEY_SCHEME}{repo}{RESOURCE_KEY_REV_SEPARATOR}{rev}{RESOURCE_KEY_PATH_SEPARATOR}{path}"
            ),
            None => format!("{RESOURCE_KEY_SCHEME}{repo}{RESOURCE_KEY_PATH_SEPARATOR}{path}"),
        };
        Self {
            repo,
            rev,
            path,
            canonical,
        }
    }

    /// Parse a canonical key string
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix(RESOURCE_KEY_SCHEME)
            .ok_or_else(|| invalid_key(uri, "missing git:// scheme"))?;
        let (location, path) = rest
            .split_once(RESOURCE_KEY_PATH_SEPARATOR)
            .ok_or_else(|| invalid_key(uri, "missing #path component"))?;
        let (repo, rev) = match location.split_once(RESOURCE_KEY_REV_SEPARATOR) {
            Some((repo, rev)) => (repo, Some(rev)),
            None => (location, None),
        };
        if repo.is_empty() {
            return Err(invalid_key(uri, "empty repository name"));
        }
        Ok(Self::new(repo, rev, path))
    }

    /// Repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Revision, if the key pins one
    pub fn rev(&self) -> Option<&str> {
        self.rev.as_deref()
    }

    /// File path within the repository
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical string form
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn invalid_key(uri: &str, reason: &str) -> Error {
    Error::configuration(format!("invalid resource key '{uri}': {reason}"))
}

impl PartialEq for ResourceKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for ResourceKey {}

impl Hash for ResourceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for ResourceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ResourceKey> for String {
    fn from(key: ResourceKey) -> Self {
        key.canonical
    }
}

/// Resolved metadata for a [`ResourceKey`]
///
/// Immutable once resolved; a re-fetch replaces the entry instead of mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// The key this entry was resolved for
    pub key: ResourceKey,
    /// File path within the repository
    pub path: String,
    /// Owning repository name
    pub repository: String,
    /// Resolved commit id of the revision
    pub commit: String,
    /// Whether the path names a directory
    pub is_directory: bool,
    /// File content (regular files only)
    pub content: Option<String>,
}

impl ResourceEntry {
    /// Entry for a regular file
    pub fn file<C: Into<String>, S: Into<String>>(key: ResourceKey, commit: C, content: S) -> Self {
        Self {
            path: key.path().to_string(),
            repository: key.repo().to_string(),
            commit: commit.into(),
            is_directory: false,
            content: Some(content.into()),
            key,
        }
    }

    /// Entry for a directory
    pub fn directory<C: Into<String>>(key: ResourceKey, commit: C) -> Self {
        Self {
            path: key.path().to_string(),
            repository: key.repo().to_string(),
            commit: commit.into(),
            is_directory: true,
            content: None,
            key,
        }
    }

    /// Text content, or `ResourceNotFound` when the entry has none
    pub fn text(&self) -> Result<&str> {
        self.content
            .as_deref()
            .ok_or_else(|| Error::resource_not_found(self.key.as_str()))
    }

    /// Key naming this entry's file at its resolved commit
    pub fn commit_key(&self) -> ResourceKey {
        ResourceKey::new(self.repository.clone(), Some(&self.commit), self.path.clone())
    }
}
