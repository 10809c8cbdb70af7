//! Markdown-to-slide-model parser.
//!
//! A document is split into slide chunks on `---` lines. Each chunk has its
//! `<!-- -->` speaker notes pulled out, then its lines are walked top to
//! bottom and grouped into titles, paragraphs, lists, tables, code blocks,
//! and images.

pub mod code;
pub mod inline;
pub mod list;
pub mod notes;
pub mod parser;
pub mod rules;
pub mod segment;
pub mod table;

pub use inline::format_inline;
pub use list::{ListKind, ListParser};
pub use notes::{extract_notes, ExtractedNotes};
pub use parser::SlideParser;
pub use rules::{LineClassifier, LineKind};
pub use segment::{segment, DEFAULT_SEPARATOR};
