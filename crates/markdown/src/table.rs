//! Pipe tables with a header-separator row.

use crate::inline::format_inline;
use regex::Regex;
use slides_core::{Alignment, Column, ContentElement, TableModel};
use std::sync::LazyLock;

/// Header-separator row: `| :--- | ---: |`, `---|---`, `:-:`
static SEPARATOR_ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").unwrap()
});

/// Check whether a line is a header-separator row.
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW_REGEX.is_match(line)
}

/// Check whether `lines[0]` and `lines[1]` open a table: a line with a pipe
/// followed immediately by a separator row.
pub fn is_table_start(lines: &[&str]) -> bool {
    match lines {
        [header, separator, ..] => header.contains('|') && is_separator_row(separator),
        _ => false,
    }
}

/// Split a row into trimmed cell texts.
///
/// One leading and one trailing pipe are optional and dropped. `\|` is an
/// escaped pipe: it becomes a literal `|` and does not split.
pub fn split_row(line: &str) -> Vec<String> {
    let mut row = line.trim();
    row = row.strip_prefix('|').unwrap_or(row);
    if row.ends_with('|') && !row.ends_with("\\|") {
        row = &row[..row.len() - 1];
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Alignment for one separator cell.
pub fn parse_alignment(cell: &str) -> Alignment {
    let cell = cell.trim();
    match (cell.starts_with(':'), cell.ends_with(':') && cell.len() > 1) {
        (true, true) => Alignment::Center,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::Default,
    }
}

/// Parse a table starting at `lines[0]`.
///
/// The header row fixes the column count. Data rows run until the first
/// line without a pipe. Short rows are padded with empty cells and extra
/// cells are dropped.
///
/// Returns the table element and the number of lines consumed, or `None`
/// if the lines do not open a table.
pub fn parse_table(lines: &[&str]) -> Option<(ContentElement, usize)> {
    if !is_table_start(lines) {
        return None;
    }

    let header = split_row(lines[0]);
    let alignments = split_row(lines[1]);
    let columns = (0..header.len())
        .map(|idx| Column {
            alignment: alignments
                .get(idx)
                .map_or(Alignment::Default, |cell| parse_alignment(cell)),
        })
        .collect();

    let mut table = TableModel::new(columns);
    table.push_row(header.iter().map(|cell| format_inline(cell)).collect());

    let mut consumed = 2;
    for line in &lines[2..] {
        if !line.contains('|') {
            break;
        }
        let cells = split_row(line);
        if let Some(original) = table.push_row(cells.iter().map(|cell| format_inline(cell)).collect())
        {
            log::warn!(
                "Table row has {} cells, expected {}; row was adjusted",
                original,
                table.width()
            );
        }
        consumed += 1;
    }

    log::debug!(
        "Table: {} columns, {} data rows",
        table.width(),
        table.body_rows().len()
    );

    Some((ContentElement::Table(table), consumed))
}
