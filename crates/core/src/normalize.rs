//! Source text normalization for Markdown decks.
//!
//! Brings raw file contents into the form the parser expects: UTF-8 with
//! `\n` line endings and no byte-order mark. Tabs and other whitespace are
//! left untouched so code blocks stay verbatim.

use crate::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Matches Windows and classic Mac line endings.
static LINE_ENDING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());

/// Byte-order mark some editors prepend to UTF-8 files.
const BOM: char = '\u{FEFF}';

/// Prepares raw document text for parsing.
#[derive(Debug, Clone)]
pub struct SourceNormalizer {
    /// Whether to apply Unicode NFC composition.
    compose_unicode: bool,
}

impl Default for SourceNormalizer {
    fn default() -> Self {
        Self {
            compose_unicode: true,
        }
    }
}

impl SourceNormalizer {
    /// Create a new normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compose decomposed characters (NFC).
    pub fn with_compose_unicode(mut self, compose: bool) -> Self {
        self.compose_unicode = compose;
        self
    }

    /// Normalize a whole document.
    ///
    /// - Strips a leading byte-order mark
    /// - Converts `\r\n` and lone `\r` to `\n`
    /// - Composes decomposed characters when enabled
    pub fn normalize(&self, text: &str) -> String {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let text = LINE_ENDING_REGEX.replace_all(text, "\n");

        if self.compose_unicode {
            text.nfc().collect()
        } else {
            text.into_owned()
        }
    }

    /// Read a file and normalize its contents.
    pub fn load(&self, path: &Path) -> Result<String> {
        let raw = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", raw.len(), path.display());
        Ok(self.normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_to_lf() {
        let normalizer = SourceNormalizer::new();
        assert_eq!(normalizer.normalize("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn test_lone_cr_to_lf() {
        let normalizer = SourceNormalizer::new();
        assert_eq!(normalizer.normalize("a\rb"), "a\nb");
    }

    #[test]
    fn test_strips_bom() {
        let normalizer = SourceNormalizer::new();
        assert_eq!(normalizer.normalize("\u{FEFF}# Title"), "# Title");
    }

    #[test]
    fn test_bom_only_stripped_at_start() {
        let normalizer = SourceNormalizer::new();
        assert_eq!(normalizer.normalize("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_tabs_preserved() {
        let normalizer = SourceNormalizer::new();
        assert_eq!(
            normalizer.normalize("```\n\tindented\n```"),
            "```\n\tindented\n```"
        );
    }

    #[test]
    fn test_composes_decomposed_accents() {
        let normalizer = SourceNormalizer::new();
        // "e" followed by a combining acute accent
        assert_eq!(normalizer.normalize("Caf\u{0065}\u{0301}"), "Caf\u{00E9}");
    }

    #[test]
    fn test_composition_can_be_disabled() {
        let normalizer = SourceNormalizer::new().with_compose_unicode(false);
        assert_eq!(
            normalizer.normalize("Caf\u{0065}\u{0301}"),
            "Caf\u{0065}\u{0301}"
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SourceNormalizer::new()
            .load(Path::new("/definitely/not/here.md"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::IoError(_)));
    }
}
