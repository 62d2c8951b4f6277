//! Unit tests for diagnostics and enrichment joins

use remedy_domain::{
    Diagnostic, DiagnosticSeverity, EnrichedDiagnostic, Error, Position, Range, ResourceEntry,
    ResourceKey,
};
use std::sync::Arc;

fn key(path: &str) -> ResourceKey {
    ResourceKey::new("repo", Some("main"), path)
}

#[test]
fn test_diagnostic_identity_format() {
    let diagnostic = Diagnostic::new(
        key("file.go"),
        Range::new(Position::new(2, 7), Position::new(2, 12)),
        DiagnosticSeverity::Warning,
        "unused import",
    );
    assert_eq!(diagnostic.identity(), "file.go:2:7:unused import");
}

#[test]
fn test_identity_ignores_end_and_severity() {
    let a = Diagnostic::new(key("f"), Range::lines(1, 2), DiagnosticSeverity::Error, "m");
    let b = Diagnostic::new(key("f"), Range::lines(1, 9), DiagnosticSeverity::Hint, "m")
        .with_code("X1");
    assert_eq!(a.identity(), b.identity());
}

#[test]
fn test_enriched_uses_entry_path() {
    let diagnostic = Diagnostic::new(key("a.go"), Range::lines(0, 1), DiagnosticSeverity::Error, "m");
    let entry = Arc::new(ResourceEntry::file(key("a.go"), "c1", "x\n"));
    let enriched = EnrichedDiagnostic::new(diagnostic.clone(), entry).expect("same key");
    assert_eq!(enriched.identity(), diagnostic.identity());
    assert_eq!(enriched.message, "m");
    assert_eq!(enriched.entry().commit, "c1");
}

#[test]
fn test_enriched_rejects_foreign_entry() {
    let diagnostic = Diagnostic::new(key("a.go"), Range::lines(0, 1), DiagnosticSeverity::Error, "m");
    let entry = Arc::new(ResourceEntry::file(key("b.go"), "c1", "x\n"));
    assert!(matches!(
        EnrichedDiagnostic::new(diagnostic, entry),
        Err(Error::Internal { .. })
    ));
}

#[test]
fn test_position_ordering() {
    assert!(Position::new(1, 9) < Position::new(2, 0));
    assert!(Position::new(2, 0) < Position::new(2, 1));
    assert!(Range::at(Position::new(3, 3)).is_empty());
}
