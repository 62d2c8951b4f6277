//! Unit tests for code actions and workspace edits

use remedy_domain::{CodeAction, Position, Range, ResourceKey, TextEditOperation, WorkspaceEdit};

#[test]
fn test_identity_prefers_id() {
    let titled = CodeAction::new("Remove import");
    assert_eq!(titled.identity(), "Remove import");
    let with_id = CodeAction::new("Remove import").with_id("go.remove-import");
    assert_eq!(with_id.identity(), "go.remove-import");
}

#[test]
fn test_workspace_edit_groups_by_resource() {
    let a = ResourceKey::new("repo", None, "a.go");
    let b = ResourceKey::new("repo", None, "b.go");
    let edit = WorkspaceEdit::new()
        .with_insert(a.clone(), Position::new(0, 0), "x")
        .with_replace(b.clone(), Range::lines(1, 2), "")
        .with_insert(a.clone(), Position::new(3, 0), "y");

    let resources: Vec<_> = edit.resources().cloned().collect();
    assert_eq!(resources, vec![a, b]);
    assert_eq!(edit.resource_edits()[0].operations.len(), 2);
}

#[test]
fn test_deserialized_edit_merges_repeated_resources() {
    let a = ResourceKey::new("repo", None, "a.go");
    let b = ResourceKey::new("repo", None, "b.go");
    let insert = |line: u32, text: &str| TextEditOperation::insert(Position::new(line, 0), text);
    let json = serde_json::json!({
        "edits": [
            { "resource": a.as_str(), "operations": [insert(0, "x")] },
            { "resource": b.as_str(), "operations": [insert(1, "y")] },
            { "resource": a.as_str(), "operations": [insert(3, "z")] },
        ]
    });

    let edit: WorkspaceEdit = serde_json::from_value(json).expect("valid edit json");

    let resources: Vec<_> = edit.resources().cloned().collect();
    assert_eq!(resources, vec![a, b]);
    assert_eq!(
        edit.resource_edits()[0].operations,
        vec![insert(0, "x"), insert(3, "z")]
    );
}

#[test]
fn test_has_edit_requires_operations() {
    assert!(!CodeAction::new("noop").has_edit());
    assert!(!CodeAction::new("empty").with_edit(WorkspaceEdit::new()).has_edit());
    let key = ResourceKey::new("repo", None, "a.go");
    let action = CodeAction::new("fix").with_edit(WorkspaceEdit::new().with_insert(
        key,
        Position::new(0, 0),
        "x",
    ));
    assert!(action.has_edit());
}

#[test]
fn test_operation_range_and_text() {
    let insert = TextEditOperation::insert(Position::new(1, 2), "abc");
    assert!(insert.range().is_empty());
    assert_eq!(insert.text(), "abc");
    let delete = TextEditOperation::delete(Range::lines(0, 1));
    assert_eq!(delete.text(), "");
}

#[test]
fn test_operation_serde_tag() {
    let op = TextEditOperation::insert(Position::new(0, 0), "x");
    let json = serde_json::to_value(&op).expect("serialize");
    assert_eq!(json["kind"], "insert");
}
