//! Line classification for the slide body walk.
//!
//! Rules are tried in a fixed order and the first match wins. Keeping them
//! in one table makes precedence explicit and lets each rule be tested on
//! its own.

use crate::code::is_fence_open;
use crate::list::ListParser;
use crate::table::is_table_start;
use regex::Regex;
use std::sync::LazyLock;

/// `# Title` through `###### Title`
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(\S.*)$").unwrap());

/// `![alt](path)` alone on a line
static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").unwrap());

/// What the line at the cursor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    CodeFence,
    Heading,
    Image,
    Table,
    ListItem,
    Text,
}

/// A rule sees the remaining lines of the slide, cursor line first.
type Rule = fn(&LineClassifier, &[&str]) -> bool;

/// Content rules in precedence order. A non-blank line matching none of
/// them is [`LineKind::Text`].
const RULES: [(LineKind, Rule); 5] = [
    (LineKind::CodeFence, |_, lines| is_fence_open(lines[0])),
    (LineKind::Heading, |_, lines| heading(lines[0]).is_some()),
    (LineKind::Image, |_, lines| image(lines[0]).is_some()),
    (LineKind::Table, |_, lines| is_table_start(lines)),
    (LineKind::ListItem, |c, lines| c.lists.item(lines[0]).is_some()),
];

/// Classifies the line at the cursor.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    lists: ListParser,
}

impl LineClassifier {
    /// Create a classifier using the given list parser for list items.
    pub fn new(lists: ListParser) -> Self {
        Self { lists }
    }

    /// The list parser used for list-item detection.
    pub fn lists(&self) -> &ListParser {
        &self.lists
    }

    /// Classify `lines[0]`, looking ahead where a rule needs to.
    pub fn classify(&self, lines: &[&str]) -> LineKind {
        match lines.first() {
            None => LineKind::Blank,
            Some(line) if line.trim().is_empty() => LineKind::Blank,
            Some(_) => RULES
                .iter()
                .find(|(_, rule)| rule(self, lines))
                .map_or(LineKind::Text, |(kind, _)| *kind),
        }
    }
}

/// Heading level and text, if the line is a heading.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_REGEX.captures(line.trim())?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str().trim();
    Some((level, text))
}

/// Alt text and path, if the line is an image reference on its own.
pub fn image(line: &str) -> Option<(&str, &str)> {
    let caps = IMAGE_REGEX.captures(line.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str().trim()))
}
