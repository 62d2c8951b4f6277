//! Code actions and workspace edits

use crate::value_objects::diagnostic::{Diagnostic, Position, Range};
use crate::value_objects::resource::ResourceKey;
use serde::{Deserialize, Serialize};

/// A single textual operation on one resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextEditOperation {
    /// Replace the text in `range` with `new_text`
    Replace {
        /// Range to replace
        range: Range,
        /// Replacement text
        new_text: String,
    },
    /// Insert `text` at `position`
    Insert {
        /// Insertion point
        position: Position,
        /// Inserted text
        text: String,
    },
}

impl TextEditOperation {
    /// Replace operation
    pub fn replace<S: Into<String>>(range: Range, new_text: S) -> Self {
        Self::Replace {
            range,
            new_text: new_text.into(),
        }
    }

    /// Insert operation
    pub fn insert<S: Into<String>>(position: Position, text: S) -> Self {
        Self::Insert {
            position,
            text: text.into(),
        }
    }

    /// Deletion, expressed as a replace with empty text
    pub fn delete(range: Range) -> Self {
        Self::replace(range, String::new())
    }

    /// The range this operation replaces (empty for inserts)
    pub fn range(&self) -> Range {
        match self {
            Self::Replace { range, .. } => *range,
            Self::Insert { position, .. } => Range::at(*position),
        }
    }

    /// The text written in place of [`Self::range`]
    pub fn text(&self) -> &str {
        match self {
            Self::Replace { new_text, .. } => new_text,
            Self::Insert { text, .. } => text,
        }
    }
}

/// Operations targeting one resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceEdit {
    /// Edited resource
    pub resource: ResourceKey,
    /// Operations, in the order the provider listed them
    pub operations: Vec<TextEditOperation>,
}

/// Ordered collection of per-resource text operations
///
/// Only insert and replace are supported; file create, delete and rename are
/// not part of a workspace edit.
///
/// Each resource appears at most once. Deserialized edits listing a resource
/// several times are merged into its first entry, so every operation on a
/// file is checked against the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawWorkspaceEdit")]
pub struct WorkspaceEdit {
    edits: Vec<ResourceEdit>,
}

#[derive(Deserialize)]
struct RawWorkspaceEdit {
    #[serde(default)]
    edits: Vec<ResourceEdit>,
}

impl From<RawWorkspaceEdit> for WorkspaceEdit {
    fn from(raw: RawWorkspaceEdit) -> Self {
        let mut edit = Self::new();
        for resource_edit in raw.edits {
            for operation in resource_edit.operations {
                edit.push(resource_edit.resource.clone(), operation);
            }
        }
        edit
    }
}

impl WorkspaceEdit {
    /// Empty edit
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation on `resource`
    pub fn push(&mut self, resource: ResourceKey, operation: TextEditOperation) {
        match self.edits.iter_mut().find(|e| e.resource == resource) {
            Some(edit) => edit.operations.push(operation),
            None => self.edits.push(ResourceEdit {
                resource,
                operations: vec![operation],
            }),
        }
    }

    /// Builder form of [`Self::push`] for a replace
    pub fn with_replace<S: Into<String>>(
        mut self,
        resource: ResourceKey,
        range: Range,
        new_text: S,
    ) -> Self {
        self.push(resource, TextEditOperation::replace(range, new_text));
        self
    }

    /// Builder form of [`Self::push`] for an insert
    pub fn with_insert<S: Into<String>>(
        mut self,
        resource: ResourceKey,
        position: Position,
        text: S,
    ) -> Self {
        self.push(resource, TextEditOperation::insert(position, text));
        self
    }

    /// Per-resource edits, in first-touched order
    pub fn resource_edits(&self) -> &[ResourceEdit] {
        &self.edits
    }

    /// Touched resources, in first-touched order
    pub fn resources(&self) -> impl Iterator<Item = &ResourceKey> {
        self.edits.iter().map(|e| &e.resource)
    }

    /// Whether the edit has no operation at all
    pub fn is_empty(&self) -> bool {
        self.edits.iter().all(|e| e.operations.is_empty())
    }
}

/// Opaque command descriptor carried by command-only actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Display title
    pub title: String,
    /// Command identifier
    pub command: String,
    /// Command arguments
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
}

/// A proposed remediation for one or more diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAction {
    /// Stable provider-supplied identifier, when the provider has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Proposed edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<WorkspaceEdit>,
    /// Command to run instead of (or in addition to) the edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Diagnostics this action resolves
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl CodeAction {
    /// Action with only a title
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            id: None,
            title: title.into(),
            edit: None,
            command: None,
            diagnostics: Vec::new(),
        }
    }

    /// Set the stable identifier
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the edit
    pub fn with_edit(mut self, edit: WorkspaceEdit) -> Self {
        self.edit = Some(edit);
        self
    }

    /// Set the command
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Record a resolved diagnostic
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Identity used by persisted selections: the id, else the title
    ///
    /// Titles are not guaranteed unique across providers; two actions sharing
    /// a title and lacking ids are indistinguishable to a persisted selection.
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.title)
    }

    /// Whether the action carries an edit with at least one operation
    pub fn has_edit(&self) -> bool {
        self.edit.as_ref().is_some_and(|e| !e.is_empty())
    }
}
