//! Splitting a document into slide chunks.

use crate::code::{is_fence_close, is_fence_open};
use crate::notes::comment_ranges;
use slides_core::{Error, Result};

/// Default slide separator, compared against each trimmed line.
pub const DEFAULT_SEPARATOR: &str = "---";

/// Split a document into raw slide chunks.
///
/// A line whose trimmed content equals `separator` ends the current chunk,
/// unless it sits inside a fenced code block that is closed later in the
/// document, or inside a comment region. Fences inside comments are not
/// fences. Separator lines belong to no chunk. Chunks that are empty or
/// whitespace-only are dropped; the others are returned untrimmed, as
/// slices of `document`.
pub fn segment<'a>(document: &'a str, separator: &str) -> Result<Vec<&'a str>> {
    let masked = mask_comments(document);
    let lines: Vec<&str> = masked.split_inclusive('\n').collect();
    let fenced = fenced_lines(&lines);

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for (line, in_code) in lines.iter().zip(fenced) {
        if !in_code && line.trim() == separator {
            chunks.push(&document[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    chunks.push(&document[start..]);

    let chunks: Vec<&str> = chunks
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .collect();

    if chunks.is_empty() {
        return Err(Error::EmptyDocument);
    }

    log::debug!("Segmented document into {} slides", chunks.len());
    Ok(chunks)
}

/// Blank out comment regions, keeping newlines and byte offsets intact.
fn mask_comments(document: &str) -> String {
    let mut masked = document.to_string();
    for range in comment_ranges(document) {
        let blanked: String = document[range.clone()]
            .chars()
            .map(|c| if c == '\n' { "\n".to_string() } else { " ".repeat(c.len_utf8()) })
            .collect();
        masked.replace_range(range, &blanked);
    }
    masked
}

/// Mark the lines that belong to a closed fenced block, fences included.
///
/// An opening fence with no closing fence after it marks nothing; it is
/// bounded by its slide instead.
fn fenced_lines(lines: &[&str]) -> Vec<bool> {
    let mut fenced = vec![false; lines.len()];
    let mut idx = 0;

    while idx < lines.len() {
        if is_fence_open(lines[idx]) {
            let close = lines[idx + 1..]
                .iter()
                .position(|l| is_fence_close(l))
                .map(|offset| idx + 1 + offset);
            if let Some(close) = close {
                fenced[idx..=close].fill(true);
                idx = close + 1;
                continue;
            }
            log::debug!("Fence on line {} never closes", idx + 1);
        }
        idx += 1;
    }

    fenced
}
