//! Inline formatting: bold, italic, and code spans.
//!
//! A single left-to-right scan. At each position the first matching marker
//! wins, in this order: `` ` `` (code), `**` (bold), `*` (italic), `_`
//! (italic). Marker contents are taken verbatim and never rescanned, so
//! styles do not nest. A marker without a closing counterpart, or with
//! nothing between the pair, is kept as literal text.

use slides_core::{SpanStyle, TextSpan};

/// Convert one line or cell of raw text into styled spans.
///
/// Concatenating the span texts gives back the input with the matched
/// marker characters removed.
pub fn format_inline(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let prev = text[..pos].chars().next_back();

        match match_marker(rest, prev) {
            Some(Marker::Span { inner, len, style }) => {
                if !plain.is_empty() {
                    spans.push(TextSpan::plain(std::mem::take(&mut plain)));
                }
                spans.push(TextSpan::styled(inner, style));
                pos += len;
            }
            Some(Marker::Literal(len)) => {
                plain.push_str(&rest[..len]);
                pos += len;
            }
            None => {
                // Safe: pos < text.len() so there is at least one char.
                let c = rest.chars().next().unwrap_or_default();
                plain.push(c);
                pos += c.len_utf8();
            }
        }
    }

    if !plain.is_empty() {
        spans.push(TextSpan::plain(plain));
    }

    spans
}

enum Marker<'a> {
    /// A matched pair: inner text, total bytes consumed, style.
    Span {
        inner: &'a str,
        len: usize,
        style: SpanStyle,
    },
    /// An unmatched opening marker of this many bytes, emitted as-is.
    Literal(usize),
}

fn match_marker<'a>(rest: &'a str, prev: Option<char>) -> Option<Marker<'a>> {
    if rest.starts_with('`') {
        return Some(delimited(rest, "`", SpanStyle::CODE));
    }
    if rest.starts_with("**") {
        return Some(delimited(rest, "**", SpanStyle::BOLD));
    }
    if rest.starts_with('*') {
        return Some(single_asterisk(rest));
    }
    if rest.starts_with('_') {
        return underscore(rest, prev);
    }
    None
}

/// Match `marker inner marker` at the start of `rest`.
fn delimited<'a>(rest: &'a str, marker: &str, style: SpanStyle) -> Marker<'a> {
    let open = marker.len();
    match rest[open..].find(marker) {
        Some(close) if close > 0 => Marker::Span {
            inner: &rest[open..open + close],
            len: open + close + marker.len(),
            style,
        },
        _ => Marker::Literal(open),
    }
}

/// `*text*` italics. Neither asterisk may be part of a `**` pair, the
/// opening one must be followed by text and the closing one preceded by it.
fn single_asterisk(rest: &str) -> Marker<'_> {
    let body = &rest[1..];
    if !body.chars().next().is_some_and(|c| c != '*' && !c.is_whitespace()) {
        return Marker::Literal(1);
    }

    let bytes = body.as_bytes();
    for (idx, _) in body.match_indices('*') {
        let paired = (idx > 0 && bytes[idx - 1] == b'*') || bytes.get(idx + 1) == Some(&b'*');
        let before = body[..idx].chars().next_back();
        if idx > 0 && !paired && before.is_some_and(|c| !c.is_whitespace()) {
            return Marker::Span {
                inner: &body[..idx],
                len: idx + 2,
                style: SpanStyle::ITALIC,
            };
        }
    }

    Marker::Literal(1)
}

/// `_text_` italics. Both underscores must stand alone and sit on a word
/// boundary, which keeps `snake_case` and `__dunder__` literal.
fn underscore(rest: &str, prev: Option<char>) -> Option<Marker<'_>> {
    let next = rest[1..].chars().next();
    let opens = !prev.is_some_and(|c| c.is_alphanumeric() || c == '_')
        && next.is_some_and(|c| c != '_' && !c.is_whitespace());
    if !opens {
        return None;
    }

    let body = &rest[1..];
    for (idx, _) in body.match_indices('_') {
        let before = body[..idx].chars().next_back();
        let after = body[idx + 1..].chars().next();
        if idx > 0
            && before != Some('_')
            && !after.is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            return Some(Marker::Span {
                inner: &body[..idx],
                len: idx + 2,
                style: SpanStyle::ITALIC,
            });
        }
    }

    Some(Marker::Literal(1))
}
