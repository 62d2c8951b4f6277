//! Unified diff computation

use remedy_domain::constants::DIFF_NO_NEWLINE_MARKER;
use remedy_domain::value_objects::{FileDiff, Hunk, ResourceEntry};
use similar::{ChangeTag, TextDiff};

/// Line-based unified diff of `entry` between `original` and `modified`
///
/// `None` when the texts are equal, so callers can omit resources whose edits
/// produce no net change.
pub fn file_diff(
    entry: &ResourceEntry,
    original: &str,
    modified: &str,
    context_lines: usize,
) -> Option<FileDiff> {
    if original == modified {
        return None;
    }
    let diff = TextDiff::from_lines(original, modified);
    let mut unified = diff.unified_diff();
    unified.context_radius(context_lines);

    let hunks: Vec<Hunk> = unified
        .iter_hunks()
        .map(|hunk| {
            let mut body = String::new();
            for change in hunk.iter_changes() {
                body.push(match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                });
                body.push_str(change.value());
                if change.missing_newline() {
                    body.push('\n');
                    body.push_str(DIFF_NO_NEWLINE_MARKER);
                    body.push('\n');
                }
            }
            Hunk {
                header: hunk.header().to_string(),
                body,
            }
        })
        .collect();

    if hunks.is_empty() {
        return None;
    }
    Some(FileDiff {
        resource: entry.key.clone(),
        old_path: Some(entry.path.clone()),
        new_path: Some(entry.path.clone()),
        hunks,
    })
}
