//! Speaker notes carried in `<!-- ... -->` comment regions.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A comment region, possibly spanning lines. Non-greedy so each opening
/// marker pairs with the nearest closing one.
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").unwrap());

const COMMENT_OPEN: &str = "<!--";

/// Separator placed between notes from different comment regions.
pub const NOTES_SEPARATOR: &str = "\n\n";

/// A slide's text split into what is shown and what goes into the notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNotes {
    /// Slide text with every comment region removed.
    pub visible: String,
    /// Trimmed comment contents in source order, blank-line separated.
    pub notes: String,
}

/// Byte ranges of the complete comment regions in `text`, markers
/// included.
pub fn comment_ranges(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    COMMENT_REGEX.find_iter(text).map(|m| m.range())
}

/// Remove comment regions from `text` and collect their contents.
///
/// Regions are removed outright, not replaced with whitespace. Empty
/// comments contribute nothing to the notes. An opening marker with no
/// closing marker is left in the visible text.
///
/// Removal repeats until no region remains, so running this again on the
/// visible text never finds anything.
pub fn extract_notes(text: &str) -> ExtractedNotes {
    let mut visible = text.to_string();
    let mut notes: Vec<String> = Vec::new();

    while COMMENT_REGEX.is_match(&visible) {
        notes.extend(
            COMMENT_REGEX
                .captures_iter(&visible)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|note| !note.is_empty())
                .map(str::to_string),
        );
        visible = COMMENT_REGEX.replace_all(&visible, "").into_owned();
    }

    if visible.contains(COMMENT_OPEN) {
        log::warn!("Unterminated comment marker left in slide text");
    }

    ExtractedNotes {
        visible,
        notes: notes.join(NOTES_SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_comment() {
        let extracted = extract_notes("# Title\n<!-- say hello -->\n- item");
        assert_eq!(extracted.visible, "# Title\n\n- item");
        assert_eq!(extracted.notes, "say hello");
    }

    #[test]
    fn test_multiple_comments_joined_in_order() {
        let extracted = extract_notes("<!-- first -->\ntext\n<!--\n  second\n  line\n-->");
        assert_eq!(extracted.notes, "first\n\nsecond\n  line");
        assert_eq!(extracted.visible, "\ntext\n");
    }

    #[test]
    fn test_inline_comment_removed_without_padding() {
        let extracted = extract_notes("before<!-- n -->after");
        assert_eq!(extracted.visible, "beforeafter");
        assert_eq!(extracted.notes, "n");
    }

    #[test]
    fn test_unterminated_comment_left_alone() {
        let text = "text <!-- never closed\nmore";
        let extracted = extract_notes(text);
        assert_eq!(extracted.visible, text);
        assert_eq!(extracted.notes, "");
    }

    #[test]
    fn test_empty_comment_adds_no_note() {
        let extracted = extract_notes("a<!-- -->b<!-- real -->");
        assert_eq!(extracted.visible, "ab");
        assert_eq!(extracted.notes, "real");
    }

    #[test]
    fn test_no_comments() {
        let extracted = extract_notes("plain slide");
        assert_eq!(extracted.visible, "plain slide");
        assert!(extracted.notes.is_empty());
    }

    #[test]
    fn test_comment_ranges() {
        let text = "a<!-- x -->b\n<!--\ny\n-->";
        let ranges: Vec<_> = comment_ranges(text).collect();
        assert_eq!(ranges, vec![1..11, 13..23]);
        assert_eq!(&text[ranges[1].clone()], "<!--\ny\n-->");
    }

    #[test]
    fn test_unterminated_comment_has_no_range() {
        assert_eq!(comment_ranges("a <!-- open").count(), 0);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let inputs = [
            "# T\n<!-- a -->\nbody <!-- b --> end",
            "<!<!-- x -->-- y -->",
            "unterminated <!-- here",
        ];
        for input in inputs {
            let once = extract_notes(input);
            let twice = extract_notes(&once.visible);
            assert_eq!(twice.visible, once.visible, "input: {input}");
            assert!(twice.notes.is_empty(), "input: {input}");
        }
    }
}
