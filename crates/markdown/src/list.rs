//! Bullet and numbered list runs.

use crate::inline::format_inline;
use regex::Regex;
use slides_core::ContentElement;
use std::sync::LazyLock;

/// `1. item`, `23. item`
static ORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

/// The kind of marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` or `*` followed by whitespace.
    Bullet,
    /// A number followed by `.` and whitespace.
    Ordered,
}

/// Parser for contiguous list runs.
///
/// A run continues through:
/// - further items of the same kind
/// - indented lines that are not items, folded into the previous item
/// - blank lines, as long as the next non-blank line is an item of the
///   same kind
#[derive(Debug, Clone)]
pub struct ListParser {
    /// Whether numbered items are recognized.
    ordered_lists: bool,
}

impl Default for ListParser {
    fn default() -> Self {
        Self {
            ordered_lists: true,
        }
    }
}

impl ListParser {
    /// Create a new list parser that recognizes bullets and numbered items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether numbered items (`1. item`) are recognized.
    pub fn with_ordered_lists(mut self, enabled: bool) -> Self {
        self.ordered_lists = enabled;
        self
    }

    /// If `line` starts a list item, return its kind and the item text.
    ///
    /// A line-leading `*` followed by whitespace is always a bullet, never
    /// the start of italic text.
    pub fn item<'a>(&self, line: &'a str) -> Option<(ListKind, &'a str)> {
        let trimmed = line.trim_start();

        let mut chars = trimmed.chars();
        if let (Some('-' | '*'), Some(c)) = (chars.next(), chars.next()) {
            if c.is_whitespace() {
                return Some((ListKind::Bullet, trimmed[1..].trim()));
            }
        }

        if self.ordered_lists {
            if let Some(caps) = ORDERED_ITEM_REGEX.captures(trimmed) {
                let text = caps.get(1).map_or("", |m| m.as_str());
                return Some((ListKind::Ordered, text.trim()));
            }
        }

        None
    }

    /// Parse a list run starting at `lines[0]`.
    ///
    /// Returns the list element and the number of lines consumed, or `None`
    /// if the first line is not a list item.
    pub fn parse(&self, lines: &[&str]) -> Option<(ContentElement, usize)> {
        let (kind, first) = self.item(*lines.first()?)?;
        let mut raw_items = vec![first.to_string()];
        let mut idx = 1;

        while idx < lines.len() {
            let line = lines[idx];

            if line.trim().is_empty() {
                let resumes = lines[idx..]
                    .iter()
                    .position(|l| !l.trim().is_empty())
                    .map(|offset| idx + offset)
                    .filter(|&next| self.item_kind(lines[next]) == Some(kind));
                match resumes {
                    Some(next) => {
                        idx = next;
                        continue;
                    }
                    None => break,
                }
            }

            if let Some((item_kind, text)) = self.item(line) {
                if item_kind != kind {
                    break;
                }
                raw_items.push(text.to_string());
            } else if line.starts_with([' ', '\t']) {
                if let Some(last) = raw_items.last_mut() {
                    if !last.is_empty() {
                        last.push(' ');
                    }
                    last.push_str(line.trim());
                }
            } else {
                break;
            }

            idx += 1;
        }

        log::debug!("List run: {} items over {} lines", raw_items.len(), idx);

        let items = raw_items.iter().map(|raw| format_inline(raw)).collect();
        let element = ContentElement::List {
            ordered: kind == ListKind::Ordered,
            items,
        };
        Some((element, idx))
    }

    fn item_kind(&self, line: &str) -> Option<ListKind> {
        self.item(line).map(|(kind, _)| kind)
    }
}
