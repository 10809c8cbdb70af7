//! Fenced code blocks.

use regex::Regex;
use slides_core::ContentElement;
use std::sync::LazyLock;

/// Opening fence: three backticks and an optional word-character language.
static FENCE_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(\w*)\s*$").unwrap());

const FENCE: &str = "```";

/// Check whether a line opens a fenced code block.
pub fn is_fence_open(line: &str) -> bool {
    FENCE_OPEN_REGEX.is_match(line)
}

/// Check whether a line closes a fenced code block.
pub fn is_fence_close(line: &str) -> bool {
    line.trim() == FENCE
}

/// Parse a code block whose opening fence is `lines[0]`.
///
/// Lines between the fences are kept byte-for-byte. Without a closing
/// fence the block runs to the end of `lines`.
///
/// Returns the code block element and the number of lines consumed
/// (fences included), or `None` if `lines[0]` is not an opening fence.
pub fn parse_code_block(lines: &[&str]) -> Option<(ContentElement, usize)> {
    let caps = FENCE_OPEN_REGEX.captures(lines.first()?)?;
    let language = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    let body = &lines[1..];
    let (code_lines, consumed) = match body.iter().position(|l| is_fence_close(l)) {
        Some(close) => (&body[..close], close + 2),
        None => {
            log::warn!(
                "Unclosed code block{}; capturing to end of slide",
                language
                    .as_deref()
                    .map(|l| format!(" ({})", l))
                    .unwrap_or_default()
            );
            (body, lines.len())
        }
    };

    let element = ContentElement::CodeBlock {
        text: code_lines.join("\n"),
        language,
    };
    Some((element, consumed))
}
