//! Domain types for representing parsed slide content.
//!
//! Every value here is built once by the parser and handed to a renderer
//! as-is. The renderer may rely on the invariants documented on each type
//! without re-checking them.

use serde::{Deserialize, Serialize};

/// One slide's parsed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideModel {
    /// Slide title taken from the first heading line, if there was one.
    pub title: Option<String>,

    /// Which visual template the renderer should pick.
    pub layout_hint: LayoutHint,

    /// Body elements in presentation order.
    pub body: Vec<ContentElement>,

    /// Speaker notes collected from comment regions. Empty when the slide
    /// has none.
    pub notes: String,
}

impl SlideModel {
    /// Create an empty slide with the given layout hint.
    pub fn new(layout_hint: LayoutHint) -> Self {
        Self {
            title: None,
            layout_hint,
            body: Vec::new(),
            notes: String::new(),
        }
    }

    /// Add an element to the end of the body.
    pub fn push(&mut self, element: ContentElement) {
        self.body.push(element);
    }

    /// True when the slide has neither a title nor body content.
    ///
    /// Notes alone do not count as content.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_empty()
    }

    /// True when the slide carries speaker notes.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Coarse hint for the renderer's template choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutHint {
    /// Title-centric layout. Only ever used for the first slide of a deck
    /// whose title is a level-1 heading.
    TitleSlide,
    /// Title plus body.
    TitleAndContent,
}

impl LayoutHint {
    /// Pick the layout for a slide.
    ///
    /// `title_level` is the heading level of the slide's title line, or
    /// `None` when the slide has no title.
    pub fn for_slide(is_first_slide: bool, title_level: Option<usize>) -> Self {
        if is_first_slide && title_level == Some(1) {
            Self::TitleSlide
        } else {
            Self::TitleAndContent
        }
    }
}

/// One typed unit of a slide's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentElement {
    /// A run of text lines joined into one paragraph.
    Paragraph { spans: Vec<TextSpan> },

    /// A bullet or numbered list. Each item is its own span sequence.
    List {
        ordered: bool,
        items: Vec<Vec<TextSpan>>,
    },

    /// A pipe table.
    Table(TableModel),

    /// Verbatim fenced code.
    CodeBlock {
        text: String,
        language: Option<String>,
    },

    /// An image reference on its own line.
    Image { alt: String, path: String },
}

impl ContentElement {
    /// Short lowercase name of the element kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::List { .. } => "list",
            Self::Table(_) => "table",
            Self::CodeBlock { .. } => "code_block",
            Self::Image { .. } => "image",
        }
    }
}

/// Formatting applied to a span.
///
/// Styles are a set: any combination may be present, although the parser
/// itself only ever combines Bold with the others (for content headings).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
}

impl SpanStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        code: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
        code: false,
    };
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
        code: false,
    };
    pub const CODE: Self = Self {
        bold: false,
        italic: false,
        code: true,
    };

    /// True when no style is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.code)
    }

    /// This style with Bold added.
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A contiguous run of text sharing one style set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl TextSpan {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, SpanStyle::PLAIN)
    }

    /// Create a span with the given style.
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Concatenate span texts, dropping style information.
pub fn plain_text(spans: &[TextSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// No alignment marker in the separator row.
    #[default]
    Default,
}

/// Column metadata for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub alignment: Alignment,
}

/// A table cell is a sequence of formatted spans.
pub type Cell = Vec<TextSpan>;

/// A row/column grid with per-column alignment.
///
/// The first row is the header. Every row, header included, has exactly
/// `columns.len()` cells; [`TableModel::push_row`] enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableModel {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableModel {
    /// Create a table with the given columns and no rows.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Append a row, padding missing trailing cells with empty cells and
    /// dropping cells beyond the column count.
    ///
    /// Returns the original cell count when the row had to be adjusted.
    pub fn push_row(&mut self, mut cells: Vec<Cell>) -> Option<usize> {
        let original = cells.len();
        cells.resize_with(self.width(), Vec::new);
        self.rows.push(cells);
        (original != self.width()).then_some(original)
    }

    /// The header row, if the table has any rows.
    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows after the header.
    pub fn body_rows(&self) -> &[Vec<Cell>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> Cell {
        vec![TextSpan::plain(text)]
    }

    #[test]
    fn test_layout_hint_only_first_level_one() {
        assert_eq!(LayoutHint::for_slide(true, Some(1)), LayoutHint::TitleSlide);
        assert_eq!(
            LayoutHint::for_slide(true, Some(2)),
            LayoutHint::TitleAndContent
        );
        assert_eq!(
            LayoutHint::for_slide(false, Some(1)),
            LayoutHint::TitleAndContent
        );
        assert_eq!(LayoutHint::for_slide(true, None), LayoutHint::TitleAndContent);
    }

    #[test]
    fn test_push_row_pads_short_rows() {
        let mut table = TableModel::new(vec![Column::default(); 3]);
        let adjusted = table.push_row(vec![cell("a")]);

        assert_eq!(adjusted, Some(1));
        assert_eq!(table.rows[0].len(), 3);
        assert!(table.rows[0][1].is_empty());
        assert!(table.rows[0][2].is_empty());
    }

    #[test]
    fn test_push_row_truncates_long_rows() {
        let mut table = TableModel::new(vec![Column::default(); 2]);
        let adjusted = table.push_row(vec![cell("a"), cell("b"), cell("c")]);

        assert_eq!(adjusted, Some(3));
        assert_eq!(table.rows[0], vec![cell("a"), cell("b")]);
    }

    #[test]
    fn test_push_row_exact_width() {
        let mut table = TableModel::new(vec![Column::default(); 2]);
        assert_eq!(table.push_row(vec![cell("a"), cell("b")]), None);
    }

    #[test]
    fn test_header_and_body_rows() {
        let mut table = TableModel::new(vec![Column::default()]);
        assert!(table.header().is_none());
        assert!(table.body_rows().is_empty());

        table.push_row(vec![cell("h")]);
        table.push_row(vec![cell("1")]);
        table.push_row(vec![cell("2")]);

        assert_eq!(table.header(), Some(&[cell("h")][..]));
        assert_eq!(table.body_rows().len(), 2);
    }

    #[test]
    fn test_slide_is_empty_ignores_notes() {
        let mut slide = SlideModel::new(LayoutHint::TitleAndContent);
        slide.notes = "remember this".to_string();
        assert!(slide.is_empty());
        assert!(slide.has_notes());

        slide.title = Some("Title".to_string());
        assert!(!slide.is_empty());
    }

    #[test]
    fn test_plain_text_concatenates() {
        let spans = vec![
            TextSpan::plain("Some "),
            TextSpan::styled("text", SpanStyle::ITALIC),
        ];
        assert_eq!(plain_text(&spans), "Some text");
    }

    #[test]
    fn test_content_element_serializes_with_type_tag() {
        let element = ContentElement::Image {
            alt: "Logo".to_string(),
            path: "logo.png".to_string(),
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["path"], "logo.png");

        let back: ContentElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_span_style_with_bold() {
        let style = SpanStyle::ITALIC.with_bold();
        assert!(style.bold && style.italic && !style.code);
        assert!(SpanStyle::PLAIN.is_plain());
        assert!(!style.is_plain());
    }
}
