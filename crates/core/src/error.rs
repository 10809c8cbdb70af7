//! Error types for Markdown slide parsing.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a Markdown document into slides.
///
/// Malformed-but-recoverable input (unterminated fences, ragged table rows,
/// unmatched inline markers) never produces an error; those cases degrade
/// to a fixed fallback instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the source document.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The document contains nothing but separators and whitespace.
    #[error("Document contains no slides")]
    EmptyDocument,

    /// A slide has neither a title nor any body content once speaker notes
    /// are removed.
    #[error("Slide {} has no title and no content", .index + 1)]
    EmptySlide {
        /// 0-based position of the slide in the document.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slide_message_is_one_based() {
        let err = Error::EmptySlide { index: 2 };
        assert_eq!(err.to_string(), "Slide 3 has no title and no content");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
