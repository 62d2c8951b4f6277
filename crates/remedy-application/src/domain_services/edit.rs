//! Text edit application
//!
//! Positions are zero-based; `character` counts UTF-16 code units. Lines are
//! delimited by `\n` only, so a `\r` before it is ordinary line content.

use remedy_domain::error::{Error, Result};
use remedy_domain::value_objects::{Position, ResourceKey, TextEditOperation};

/// Apply `operations` to `content`
///
/// Operations are applied in ascending range order. Inserts at the same
/// position keep the order they were given in. Overlapping ranges,
/// positions outside the content and ranges ending before they start are
/// all `InvalidEdit`.
pub fn apply_edits(
    resource: &ResourceKey,
    content: &str,
    operations: &[TextEditOperation],
) -> Result<String> {
    let index = LineIndex::new(content);
    let mut spans = Vec::with_capacity(operations.len());
    for operation in operations {
        let range = operation.range();
        if range.end < range.start {
            return Err(Error::invalid_edit(
                resource.as_str(),
                format!("range {range} ends before it starts"),
            ));
        }
        let start = index.offset(resource, range.start)?;
        let end = index.offset(resource, range.end)?;
        spans.push((start, end, operation.text()));
    }
    // stable: equal-position inserts stay in given order
    spans.sort_by_key(|&(start, end, _)| (start, end));

    let mut edited = String::with_capacity(content.len());
    let mut cursor = 0;
    for (start, end, text) in spans {
        if start < cursor {
            return Err(Error::invalid_edit(
                resource.as_str(),
                format!("overlapping edit at byte offset {start}"),
            ));
        }
        edited.push_str(&content[cursor..start]);
        edited.push_str(text);
        cursor = end;
    }
    edited.push_str(&content[cursor..]);
    Ok(edited)
}

struct LineIndex<'a> {
    content: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(content: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { content, starts }
    }

    fn offset(&self, resource: &ResourceKey, position: Position) -> Result<usize> {
        let line = position.line as usize;
        let start = *self.starts.get(line).ok_or_else(|| {
            Error::invalid_edit(
                resource.as_str(),
                format!(
                    "line {} is past the end of the content ({} lines)",
                    position.line,
                    self.starts.len()
                ),
            )
        })?;
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.content.len(), |next| next - 1);
        let text = &self.content[start..end];

        let target = position.character as usize;
        let mut units = 0;
        for (byte, ch) in text.char_indices() {
            if units == target {
                return Ok(start + byte);
            }
            units += ch.len_utf16();
            if units > target {
                return Err(Error::invalid_edit(
                    resource.as_str(),
                    format!("position {position} splits a UTF-16 surrogate pair"),
                ));
            }
        }
        if units == target {
            return Ok(end);
        }
        Err(Error::invalid_edit(
            resource.as_str(),
            format!("character {} is past the end of line {}", position.character, position.line),
        ))
    }
}
