//! File diffs and changesets

use crate::value_objects::resource::ResourceKey;
use serde::{Deserialize, Serialize};

/// One unified-diff hunk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hunk {
    /// `@@ -a,b +c,d @@` header
    pub header: String,
    /// Body lines, each prefixed with `+`, `-` or a space and ending in `\n`
    pub body: String,
}

impl Hunk {
    /// Lines added by this hunk, without their `+` prefix
    pub fn added_lines(&self) -> Vec<&str> {
        self.prefixed_lines('+')
    }

    /// Lines removed by this hunk, without their `-` prefix
    pub fn removed_lines(&self) -> Vec<&str> {
        self.prefixed_lines('-')
    }

    fn prefixed_lines(&self, prefix: char) -> Vec<&str> {
        self.body
            .lines()
            .filter_map(|line| line.strip_prefix(prefix))
            .collect()
    }
}

/// The effect of an edit on one resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileDiff {
    /// The diffed resource
    pub resource: ResourceKey,
    /// Path before the change
    pub old_path: Option<String>,
    /// Path after the change
    pub new_path: Option<String>,
    /// Hunks in file order
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Most relevant display path
    pub fn path(&self) -> Option<&str> {
        self.new_path.as_deref().or(self.old_path.as_deref())
    }

    /// Render as a unified diff
    pub fn to_unified(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "--- {}\n",
            self.old_path
                .as_deref()
                .map_or_else(|| "/dev/null".to_string(), |p| format!("a/{p}"))
        ));
        out.push_str(&format!(
            "+++ {}\n",
            self.new_path
                .as_deref()
                .map_or_else(|| "/dev/null".to_string(), |p| format!("b/{p}"))
        ));
        for hunk in &self.hunks {
            out.push_str(&hunk.header);
            out.push('\n');
            out.push_str(&hunk.body);
        }
        out
    }
}

/// The file diffs proposed for one resource
///
/// Diffs contributed by different diagnostics are kept in first-seen
/// diagnostic order; structurally identical diffs are kept once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeset {
    /// The changed resource
    pub resource: ResourceKey,
    /// Contributing file diffs
    pub file_diffs: Vec<FileDiff>,
}

impl Changeset {
    /// Empty changeset for `resource`
    pub fn new(resource: ResourceKey) -> Self {
        Self {
            resource,
            file_diffs: Vec::new(),
        }
    }

    /// Add a diff unless an identical one is already present
    pub fn merge(&mut self, diff: FileDiff) {
        if !self.file_diffs.contains(&diff) {
            self.file_diffs.push(diff);
        }
    }

    /// All hunks, in contribution order
    pub fn hunks(&self) -> impl Iterator<Item = &Hunk> {
        self.file_diffs.iter().flat_map(|d| d.hunks.iter())
    }
}

/// Flatten per-diagnostic diffs into one changeset per resource
///
/// Resources appear in first-seen order.
pub fn collect_changesets<I: IntoIterator<Item = FileDiff>>(diffs: I) -> Vec<Changeset> {
    let mut changesets: Vec<Changeset> = Vec::new();
    for diff in diffs {
        match changesets.iter_mut().find(|c| c.resource == diff.resource) {
            Some(changeset) => changeset.merge(diff),
            None => {
                let mut changeset = Changeset::new(diff.resource.clone());
                changeset.merge(diff);
                changesets.push(changeset);
            }
        }
    }
    changesets
}
