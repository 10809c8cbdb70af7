//! Core slide model types, source normalization, and outline formatting
//! for Markdown slide decks.

pub mod error;
pub mod normalize;
pub mod outline;
pub mod types;

pub use error::{Error, Result};
pub use normalize::SourceNormalizer;
pub use outline::OutlineFormatter;
pub use types::{
    plain_text, Alignment, Cell, Column, ContentElement, LayoutHint, SlideModel, SpanStyle,
    TableModel, TextSpan,
};
