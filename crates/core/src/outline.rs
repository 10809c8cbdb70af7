//! Plain-text outline output.
//!
//! Renders parsed slides as a readable preview, one block per slide,
//! separated by blank lines.

use crate::types::{
    plain_text, Alignment, Cell, ContentElement, LayoutHint, SlideModel, SpanStyle, TextSpan,
};

/// Formatter for plain-text slide outlines.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Whether to include speaker notes.
    include_notes: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            include_notes: true,
        }
    }
}

impl OutlineFormatter {
    /// Create a new formatter that includes speaker notes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether speaker notes are included in the outline.
    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    /// Format slides into an outline.
    ///
    /// # Example output
    /// ```text
    /// Slide 1 [title]: Hi
    /// Some *text*
    ///
    /// Slide 2 [content]: Two
    /// - a
    /// - b
    /// ```
    pub fn format(&self, slides: &[SlideModel]) -> String {
        slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| self.format_slide(idx + 1, slide))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, slides: &[SlideModel]) -> String {
        let formatted = self.format(slides);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, number: usize, slide: &SlideModel) -> String {
        let layout = match slide.layout_hint {
            LayoutHint::TitleSlide => "title",
            LayoutHint::TitleAndContent => "content",
        };

        let mut lines = vec![match &slide.title {
            Some(title) => format!("Slide {} [{}]: {}", number, layout, title),
            None => format!("Slide {} [{}]", number, layout),
        }];

        for element in &slide.body {
            format_element(element, &mut lines);
        }

        if self.include_notes && slide.has_notes() {
            lines.push("Notes:".to_string());
            lines.extend(slide.notes.lines().map(|l| format!("  {}", l)));
        }

        lines.join("\n")
    }
}

fn format_element(element: &ContentElement, lines: &mut Vec<String>) {
    match element {
        ContentElement::Paragraph { spans } => lines.push(to_markdown(spans)),
        ContentElement::List { ordered, items } => {
            for (idx, item) in items.iter().enumerate() {
                if *ordered {
                    lines.push(format!("{}. {}", idx + 1, to_markdown(item)));
                } else {
                    lines.push(format!("- {}", to_markdown(item)));
                }
            }
        }
        ContentElement::Table(table) => {
            if let Some(header) = table.header() {
                lines.push(table_row(header));
                let markers: Vec<&str> = table
                    .columns
                    .iter()
                    .map(|column| match column.alignment {
                        Alignment::Left => ":---",
                        Alignment::Center => ":---:",
                        Alignment::Right => "---:",
                        Alignment::Default => "---",
                    })
                    .collect();
                lines.push(format!("| {} |", markers.join(" | ")));
            }
            lines.extend(table.body_rows().iter().map(|row| table_row(row)));
        }
        ContentElement::CodeBlock { text, language } => {
            lines.push(format!("```{}", language.as_deref().unwrap_or("")));
            lines.extend(text.lines().map(str::to_string));
            lines.push("```".to_string());
        }
        ContentElement::Image { alt, path } => {
            lines.push(format!("[image: {}]({})", alt, path));
        }
    }
}

fn table_row(cells: &[Cell]) -> String {
    let cells: Vec<String> = cells.iter().map(|c| plain_text(c)).collect();
    format!("| {} |", cells.join(" | "))
}

/// Render spans back to Markdown markers.
fn to_markdown(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|span| wrap(&span.text, span.style))
        .collect()
}

fn wrap(text: &str, style: SpanStyle) -> String {
    if style.is_plain() {
        return text.to_string();
    }
    let mut out = text.to_string();
    if style.code {
        out = format!("`{}`", out);
    }
    if style.italic {
        out = format!("*{}*", out);
    }
    if style.bold {
        out = format!("**{}**", out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, TableModel};

    fn title_slide() -> SlideModel {
        let mut slide = SlideModel::new(LayoutHint::TitleSlide);
        slide.title = Some("Hi".to_string());
        slide.push(ContentElement::Paragraph {
            spans: vec![
                TextSpan::plain("Some "),
                TextSpan::styled("text", SpanStyle::ITALIC),
            ],
        });
        slide
    }

    #[test]
    fn test_format_empty() {
        let formatter = OutlineFormatter::new();
        assert_eq!(formatter.format(&[]), "");
        assert_eq!(formatter.format_with_newline(&[]), "");
    }

    #[test]
    fn test_format_title_slide() {
        let formatter = OutlineFormatter::new();
        assert_eq!(
            formatter.format(&[title_slide()]),
            "Slide 1 [title]: Hi\nSome *text*"
        );
    }

    #[test]
    fn test_format_slides_separated_by_blank_line() {
        let formatter = OutlineFormatter::new();
        let mut second = SlideModel::new(LayoutHint::TitleAndContent);
        second.title = Some("Two".to_string());
        second.push(ContentElement::List {
            ordered: false,
            items: vec![vec![TextSpan::plain("a")], vec![TextSpan::plain("b")]],
        });

        let expected = "Slide 1 [title]: Hi\nSome *text*\n\nSlide 2 [content]: Two\n- a\n- b";
        assert_eq!(formatter.format(&[title_slide(), second]), expected);
    }

    #[test]
    fn test_format_ordered_list_numbers_items() {
        let formatter = OutlineFormatter::new();
        let mut slide = SlideModel::new(LayoutHint::TitleAndContent);
        slide.push(ContentElement::List {
            ordered: true,
            items: vec![vec![TextSpan::plain("first")], vec![TextSpan::plain("second")]],
        });

        assert_eq!(
            formatter.format(&[slide]),
            "Slide 1 [content]\n1. first\n2. second"
        );
    }

    #[test]
    fn test_format_table_code_and_image() {
        let formatter = OutlineFormatter::new();
        let mut table = TableModel::new(vec![
            Column::default(),
            Column {
                alignment: Alignment::Right,
            },
        ]);
        table.push_row(vec![vec![TextSpan::plain("A")], vec![TextSpan::plain("B")]]);
        table.push_row(vec![vec![TextSpan::plain("1")]]);

        let mut slide = SlideModel::new(LayoutHint::TitleAndContent);
        slide.push(ContentElement::Table(table));
        slide.push(ContentElement::CodeBlock {
            text: "let x = 1;".to_string(),
            language: Some("rust".to_string()),
        });
        slide.push(ContentElement::Image {
            alt: "Logo".to_string(),
            path: "logo.png".to_string(),
        });

        let expected = "Slide 1 [content]\n| A | B |\n| --- | ---: |\n| 1 |  |\n```rust\nlet x = 1;\n```\n[image: Logo](logo.png)";
        assert_eq!(formatter.format(&[slide]), expected);
    }

    #[test]
    fn test_notes_included_and_suppressed() {
        let mut slide = title_slide();
        slide.notes = "first\n\nsecond".to_string();

        let with_notes = OutlineFormatter::new().format(&[slide.clone()]);
        assert!(with_notes.ends_with("Notes:\n  first\n  \n  second"));

        let without = OutlineFormatter::new().with_notes(false).format(&[slide]);
        assert!(!without.contains("Notes:"));
    }

    #[test]
    fn test_bold_code_wrapping() {
        assert_eq!(wrap("x", SpanStyle::CODE.with_bold()), "**`x`**");
        assert_eq!(wrap("x", SpanStyle::PLAIN), "x");
    }
}
