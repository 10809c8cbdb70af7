//! Slide parser: turns a Markdown document into slide models.

use crate::code::parse_code_block;
use crate::inline::format_inline;
use crate::list::ListParser;
use crate::notes::extract_notes;
use crate::rules::{heading, image, LineClassifier, LineKind};
use crate::segment::{segment, DEFAULT_SEPARATOR};
use crate::table::parse_table;
use slides_core::{plain_text, ContentElement, Error, LayoutHint, Result, SlideModel, TextSpan};

/// Parser for Markdown slide decks.
#[derive(Debug, Clone)]
pub struct SlideParser {
    /// Line that separates slides, compared after trimming.
    separator: String,

    classifier: LineClassifier,
}

impl Default for SlideParser {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            classifier: LineClassifier::default(),
        }
    }
}

impl SlideParser {
    /// Create a new slide parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide separator line.
    ///
    /// The separator is trimmed, since lines are compared trimmed. A blank
    /// separator would split on every blank line, so it is ignored and the
    /// current separator kept.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        match separator.trim() {
            "" => log::warn!(
                "Ignoring blank slide separator, keeping {:?}",
                self.separator
            ),
            trimmed => self.separator = trimmed.to_string(),
        }
        self
    }

    /// Set whether numbered items (`1. item`) form lists.
    pub fn with_ordered_lists(mut self, enabled: bool) -> Self {
        self.classifier = LineClassifier::new(ListParser::new().with_ordered_lists(enabled));
        self
    }

    /// Parse a whole document into slides, in document order.
    ///
    /// Fails with [`Error::EmptyDocument`] when there are no slides, and
    /// with [`Error::EmptySlide`] on the first slide that has neither a
    /// title nor content.
    pub fn parse_document(&self, document: &str) -> Result<Vec<SlideModel>> {
        let slides = self
            .segment(document)?
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| self.parse_slide(chunk, index))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Parsed {} slides", slides.len());
        Ok(slides)
    }

    /// Split a document into raw slide chunks.
    pub fn segment<'a>(&self, document: &'a str) -> Result<Vec<&'a str>> {
        segment(document, &self.separator)
    }

    /// Parse one slide chunk.
    ///
    /// `index` is the chunk's 0-based position in the document. It is the
    /// only state carried between slides: a level-1 title earns
    /// [`LayoutHint::TitleSlide`] only at index 0.
    pub fn parse_slide(&self, raw: &str, index: usize) -> Result<SlideModel> {
        let extracted = extract_notes(raw);
        let lines: Vec<&str> = extracted.visible.lines().collect();

        let mut slide = SlideModel::new(LayoutHint::TitleAndContent);
        let mut title_level = None;
        let mut seen_content = false;
        let mut cursor = 0;

        while cursor < lines.len() {
            let rest = &lines[cursor..];
            let kind = self.classifier.classify(rest);

            let consumed = match kind {
                LineKind::Blank => 1,
                LineKind::Heading => match heading(rest[0]) {
                    Some((_, text)) if seen_content => {
                        slide.push(content_heading(text));
                        1
                    }
                    Some((level, text)) => {
                        title_level = Some(level);
                        slide.title = Some(plain_text(&format_inline(text)));
                        1
                    }
                    None => self.push_paragraph(rest, &mut slide),
                },
                LineKind::Image => match image(rest[0]) {
                    Some((alt, path)) => {
                        slide.push(ContentElement::Image {
                            alt: alt.to_string(),
                            path: path.to_string(),
                        });
                        1
                    }
                    None => self.push_paragraph(rest, &mut slide),
                },
                LineKind::CodeFence => self.push_block(parse_code_block(rest), rest, &mut slide),
                LineKind::Table => self.push_block(parse_table(rest), rest, &mut slide),
                LineKind::ListItem => {
                    self.push_block(self.classifier.lists().parse(rest), rest, &mut slide)
                }
                LineKind::Text => self.push_paragraph(rest, &mut slide),
            };

            if kind != LineKind::Blank {
                seen_content = true;
            }
            cursor += consumed;
        }

        slide.layout_hint = LayoutHint::for_slide(index == 0, title_level);
        slide.notes = extracted.notes;

        if slide.is_empty() {
            return Err(Error::EmptySlide { index });
        }

        log::debug!(
            "Slide {}: title {:?}, elements [{}], {} notes",
            index + 1,
            slide.title,
            slide
                .body
                .iter()
                .map(ContentElement::kind)
                .collect::<Vec<_>>()
                .join(", "),
            if slide.has_notes() { "with" } else { "no" }
        );

        Ok(slide)
    }

    /// Push a sub-parser's element, falling back to a paragraph if the
    /// sub-parser declined the lines.
    fn push_block(
        &self,
        parsed: Option<(ContentElement, usize)>,
        lines: &[&str],
        slide: &mut SlideModel,
    ) -> usize {
        match parsed {
            Some((element, consumed)) => {
                slide.push(element);
                consumed
            }
            None => self.push_paragraph(lines, slide),
        }
    }

    /// Accumulate consecutive text lines into one paragraph.
    ///
    /// Always takes `lines[0]`, then continues while lines classify as
    /// text. Lines are trimmed and joined with single spaces.
    fn push_paragraph(&self, lines: &[&str], slide: &mut SlideModel) -> usize {
        let mut parts = vec![lines[0].trim()];
        let mut consumed = 1;

        while consumed < lines.len()
            && self.classifier.classify(&lines[consumed..]) == LineKind::Text
        {
            parts.push(lines[consumed].trim());
            consumed += 1;
        }

        slide.push(ContentElement::Paragraph {
            spans: format_inline(&parts.join(" ")),
        });
        consumed
    }
}

/// A heading after the slide's first content line: a bold paragraph.
fn content_heading(text: &str) -> ContentElement {
    let spans = format_inline(text)
        .into_iter()
        .map(|span| TextSpan::styled(span.text, span.style.with_bold()))
        .collect();
    ContentElement::Paragraph { spans }
}
