//! Diagnostic value objects

use crate::error::{Error, Result};
use crate::value_objects::resource::{ResourceEntry, ResourceKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    /// Reports an error
    Error,
    /// Reports a warning
    Warning,
    /// Reports an information
    Information,
    /// Reports a hint
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "Error"),
            DiagnosticSeverity::Warning => write!(f, "Warning"),
            DiagnosticSeverity::Information => write!(f, "Information"),
            DiagnosticSeverity::Hint => write!(f, "Hint"),
        }
    }
}

/// Zero-based position in a text document
///
/// `character` counts UTF-16 code units, as language servers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line
    pub line: u32,
    /// Zero-based UTF-16 offset within the line
    pub character: u32,
}

impl Position {
    /// Create a position
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start
    pub start: Position,
    /// Exclusive end
    pub end: Position,
}

impl Range {
    /// Create a range
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Empty range at `position`
    pub const fn at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Range covering whole lines `start_line..end_line`
    pub const fn lines(start_line: u32, end_line: u32) -> Self {
        Self {
            start: Position::new(start_line, 0),
            end: Position::new(end_line, 0),
        }
    }

    /// Whether start and end coincide
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A single reported issue against a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Severity
    pub severity: DiagnosticSeverity,
    /// Location of the issue
    pub range: Range,
    /// Opaque provider-specific code
    pub code: Option<String>,
    /// Resource the diagnostic was raised against
    pub resource: ResourceKey,
}

impl Diagnostic {
    /// Create a diagnostic without a code
    pub fn new<M: Into<String>>(
        resource: ResourceKey,
        range: Range,
        severity: DiagnosticSeverity,
        message: M,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            range,
            code: None,
            resource,
        }
    }

    /// Attach an opaque code
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Identity key: `path:startLine:startCharacter:message`
    ///
    /// Two diagnostics with the same location and message are the same
    /// diagnostic across recomputations, whichever provider produced them.
    pub fn identity(&self) -> String {
        identity_key(self.resource.path(), &self.range, &self.message)
    }
}

pub(crate) fn identity_key(path: &str, range: &Range, message: &str) -> String {
    format!(
        "{}:{}:{}:{}",
        path, range.start.line, range.start.character, message
    )
}

/// A diagnostic joined with its resolved resource entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDiagnostic {
    diagnostic: Diagnostic,
    entry: Arc<ResourceEntry>,
}

impl EnrichedDiagnostic {
    /// Join a diagnostic with the entry resolved for its resource
    ///
    /// Fails unless `entry` was resolved for the diagnostic's own resource key.
    pub fn new(diagnostic: Diagnostic, entry: Arc<ResourceEntry>) -> Result<Self> {
        if entry.key != diagnostic.resource {
            return Err(Error::internal(format!(
                "entry for {} cannot enrich a diagnostic on {}",
                entry.key, diagnostic.resource
            )));
        }
        Ok(Self { diagnostic, entry })
    }

    /// The source diagnostic
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// The resolved entry
    pub fn entry(&self) -> &Arc<ResourceEntry> {
        &self.entry
    }

    /// Identity key, using the resolved entry path
    pub fn identity(&self) -> String {
        identity_key(&self.entry.path, &self.diagnostic.range, &self.diagnostic.message)
    }
}

impl std::ops::Deref for EnrichedDiagnostic {
    type Target = Diagnostic;

    fn deref(&self) -> &Self::Target {
        &self.diagnostic
    }
}
