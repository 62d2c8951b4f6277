//! Unit tests for diagnostic snapshots

use remedy_domain::{Diagnostic, DiagnosticSeverity, DiagnosticSnapshot, Range, ResourceKey};

fn diagnostic(key: &ResourceKey, message: &str) -> Diagnostic {
    Diagnostic::new(key.clone(), Range::lines(0, 1), DiagnosticSeverity::Error, message)
}

#[test]
fn test_snapshot_preserves_order() {
    let a = ResourceKey::new("repo", None, "a");
    let b = ResourceKey::new("repo", None, "b");
    let snapshot = DiagnosticSnapshot::new(vec![
        (b.clone(), vec![diagnostic(&b, "1"), diagnostic(&b, "2")]),
        (a.clone(), vec![diagnostic(&a, "3")]),
    ]);
    let messages: Vec<_> = snapshot.diagnostics().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["1", "2", "3"]);
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn test_empty_snapshot() {
    let snapshot = DiagnosticSnapshot::default();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.diagnostics().count(), 0);
}
