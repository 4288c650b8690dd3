//! Text-block classification: decides whether a free-text field renders as a
//! bulleted list or as a paragraph.
//!
//! # Rules
//! - blank text renders nothing
//! - any line starting with a marker (`-`, `*`, `•`, `1.`) makes a list
//! - more than one non-blank line makes a list, markers or not
//! - otherwise the text is a single paragraph
//!
//! The multi-line rule means a two-line note becomes a two-item list. Every
//! template styles lists identically off this decision, so it must not drift.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A bullet or numeric marker followed by whitespace or end of line.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*•]|\d+\.)(?:\s+|$)").expect("valid marker pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextBlock {
    Empty,
    List { items: Vec<String> },
    Paragraph { text: String },
}

/// Returns true if the (already trimmed) line opens with a list marker.
pub fn is_marked(line: &str) -> bool {
    MARKER.is_match(line)
}

/// Removes at most one leading marker from a line.
pub fn strip_marker(line: &str) -> &str {
    match MARKER.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

pub fn classify(text: &str) -> TextBlock {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TextBlock::Empty;
    }

    // `lines()` also strips the `\r` of CRLF endings.
    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let is_list = lines.len() > 1 || lines.iter().any(|l| is_marked(l));
    if !is_list {
        return TextBlock::Paragraph {
            text: trimmed.to_string(),
        };
    }

    let items: Vec<String> = lines
        .iter()
        .map(|l| strip_marker(l))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        TextBlock::Empty
    } else {
        TextBlock::List { items }
    }
}
