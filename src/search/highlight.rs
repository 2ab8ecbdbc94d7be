//! Span merging and highlighted rendering.

use crate::models::Span;

/// Delimiters inserted around highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub begin: &'static str,
    pub end: &'static str,
}

impl HighlightStyle {
    /// Yellow background, black text.
    pub const ANSI: Self = Self {
        begin: "\x1b[43m\x1b[30m",
        end: "\x1b[0m",
    };

    /// Plain-text brackets, for logs and non-terminal output.
    pub const BRACKETS: Self = Self {
        begin: "[",
        end: "]",
    };
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::ANSI
    }
}

/// Merge overlapping or touching spans into a sorted, disjoint set.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for span in iter {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);
    merged
}

/// Render `text` with each merged span wrapped in the style's delimiters.
///
/// Spans are character offsets into `text`; text outside every span is
/// copied verbatim. With no spans the text is returned unchanged.
pub fn render(text: &str, spans: &[Span], style: HighlightStyle) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let merged = merge_spans(spans);
    let mut out = String::with_capacity(text.len() + merged.len() * 16);
    let mut pending = merged.iter().peekable();
    let mut open: Option<Span> = None;

    for (idx, c) in text.chars().enumerate() {
        if open.is_some_and(|span| span.end == idx) {
            out.push_str(style.end);
            open = None;
        }
        if open.is_none() && pending.peek().is_some_and(|span| span.start == idx) {
            out.push_str(style.begin);
            open = pending.next().copied();
        }
        out.push(c);
    }

    // span reaching the end of the text, or clamped past it
    if open.is_some() {
        out.push_str(style.end);
    }
    out
}
