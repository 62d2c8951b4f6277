//! Tests for the edit materializer

use crate::test_utils::{FILE_GO, delete_line_action, insert_action, key};
use remedy_application::{EditMaterializer, EditMaterializerInterface};
use remedy_domain::{
    CodeAction, Command, Error, Position, Range, ResourceEntry, WorkspaceEdit,
};
use remedy_providers::{InMemoryResourceFetcher, MokaResourceCache};
use std::sync::Arc;

fn materializer() -> (Arc<InMemoryResourceFetcher>, EditMaterializer) {
    let fetcher = Arc::new(InMemoryResourceFetcher::new());
    fetcher.insert_file(key("file.go"), "c0ffee", FILE_GO);
    fetcher.insert_file(key("other.go"), "c0ffee", "package other\n");
    fetcher.insert(ResourceEntry::directory(key("pkg"), "c0ffee"));
    let cache = Arc::new(MokaResourceCache::new(fetcher.clone()));
    (fetcher, EditMaterializer::new(cache))
}

#[tokio::test]
async fn test_command_only_action_has_no_diffs() {
    let (fetcher, materializer) = materializer();
    let action = CodeAction::new("Run gofmt").with_command(Command {
        title: "gofmt".to_string(),
        command: "go.fmt".to_string(),
        arguments: Vec::new(),
    });
    assert!(materializer.materialize(&action).await.expect("ok").is_empty());
    assert_eq!(fetcher.fetch_count(), 0);
}

#[tokio::test]
async fn test_empty_edit_has_no_diffs() {
    let (fetcher, materializer) = materializer();
    let action = CodeAction::new("Nothing").with_edit(WorkspaceEdit::new());
    assert!(materializer.materialize(&action).await.expect("ok").is_empty());
    assert_eq!(fetcher.fetch_count(), 0);
}

#[tokio::test]
async fn test_delete_line_diff() {
    let (_fetcher, materializer) = materializer();
    let diffs = materializer
        .materialize(&delete_line_action("Remove import", "file.go", 5))
        .await
        .expect("ok");

    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path(), Some("file.go"));
    assert_eq!(diffs[0].hunks.len(), 1);
    assert_eq!(diffs[0].hunks[0].removed_lines(), vec!["\t\"os\""]);
    assert!(diffs[0].hunks[0].added_lines().is_empty());
}

#[tokio::test]
async fn test_one_diff_per_touched_resource_in_edit_order() {
    let (_fetcher, materializer) = materializer();
    let edit = WorkspaceEdit::new()
        .with_insert(key("other.go"), Position::new(1, 0), "// end\n")
        .with_replace(key("file.go"), Range::lines(0, 1), "package app\n");
    let diffs = materializer
        .materialize(&CodeAction::new("Both").with_edit(edit))
        .await
        .expect("ok");

    let paths: Vec<_> = diffs.iter().filter_map(|d| d.path()).collect();
    assert_eq!(paths, vec!["other.go", "file.go"]);
}

#[tokio::test]
async fn test_no_net_change_is_omitted() {
    let (_fetcher, materializer) = materializer();
    let edit = WorkspaceEdit::new()
        .with_replace(key("file.go"), Range::lines(0, 1), "package main\n")
        .with_insert(key("other.go"), Position::new(0, 0), "// generated\n");
    let diffs = materializer
        .materialize(&CodeAction::new("Partly noop").with_edit(edit))
        .await
        .expect("ok");

    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path(), Some("other.go"));
}

#[tokio::test]
async fn test_resolution_failure_fails_the_action() {
    let (_fetcher, materializer) = materializer();
    let edit = WorkspaceEdit::new()
        .with_insert(key("file.go"), Position::new(0, 0), "// a\n")
        .with_insert(key("missing.go"), Position::new(0, 0), "// b\n");
    assert!(matches!(
        materializer.materialize(&CodeAction::new("x").with_edit(edit)).await,
        Err(Error::ResourceNotFound { .. })
    ));
}

#[tokio::test]
async fn test_directory_target_is_not_found() {
    let (_fetcher, materializer) = materializer();
    assert!(matches!(
        materializer
            .materialize(&insert_action("x", "pkg", 0, "y"))
            .await,
        Err(Error::ResourceNotFound { .. })
    ));
}

#[tokio::test]
async fn test_overlapping_edit_is_invalid() {
    let (_fetcher, materializer) = materializer();
    let edit = WorkspaceEdit::new()
        .with_replace(key("file.go"), Range::lines(2, 5), "")
        .with_replace(key("file.go"), Range::lines(4, 6), "");
    assert!(matches!(
        materializer.materialize(&CodeAction::new("x").with_edit(edit)).await,
        Err(Error::InvalidEdit { .. })
    ));
}

#[tokio::test]
async fn test_overlap_split_across_json_entries_is_invalid() {
    let (_fetcher, materializer) = materializer();
    let resource = key("file.go").to_string();
    let edit: WorkspaceEdit = serde_json::from_value(serde_json::json!({
        "edits": [
            {
                "resource": resource,
                "operations": [{
                    "kind": "replace",
                    "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 1, "character": 0 } },
                    "new_text": ""
                }]
            },
            {
                "resource": resource,
                "operations": [{
                    "kind": "replace",
                    "range": { "start": { "line": 0, "character": 2 }, "end": { "line": 1, "character": 0 } },
                    "new_text": "x"
                }]
            }
        ]
    }))
    .expect("valid edit json");

    assert_eq!(edit.resource_edits().len(), 1);
    assert!(matches!(
        materializer.materialize(&CodeAction::new("x").with_edit(edit)).await,
        Err(Error::InvalidEdit { .. })
    ));
}

#[tokio::test]
async fn test_context_lines_setting() {
    let fetcher = Arc::new(InMemoryResourceFetcher::new());
    fetcher.insert_file(key("file.go"), "c0ffee", FILE_GO);
    let materializer =
        EditMaterializer::new(Arc::new(MokaResourceCache::new(fetcher))).with_context_lines(0);

    let diffs = materializer
        .materialize(&delete_line_action("Remove import", "file.go", 5))
        .await
        .expect("ok");
    assert_eq!(diffs[0].hunks[0].body, "-\t\"os\"\n");
}
