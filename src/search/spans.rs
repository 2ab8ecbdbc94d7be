//! Literal substring span detection.

use crate::models::Span;

/// Lowercase `text` without changing its character count.
///
/// Characters whose lowercase form expands to several characters (such as
/// `'İ'`) are kept unchanged, so spans found in the folded text index the
/// original text character for character.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Find every (possibly overlapping) occurrence of `pattern` in `text`.
///
/// Both inputs must already be case-folded; no normalization happens here.
/// Offsets are in characters. An empty pattern, or one longer than the
/// text, yields no spans.
pub fn find_spans(text: &str, pattern: &str) -> Vec<Span> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(i, _)| Span::new(i, i + pattern.len()))
        .collect()
}
