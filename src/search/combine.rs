//! Combining per-term results for the same document.

use crate::models::{DocumentMatchResult, LineMatch};
use std::collections::BTreeMap;

/// Merge two single-term results for the same document into a new result.
///
/// Counts add up, title spans are concatenated and sorted, and line matches
/// sharing a line number have their spans concatenated (`a` first). Spans are
/// never deduplicated here; merging for display happens at render time.
/// Neither input is modified.
pub fn combine(a: &DocumentMatchResult, b: &DocumentMatchResult) -> DocumentMatchResult {
    let mut title_spans = Vec::with_capacity(a.title_spans.len() + b.title_spans.len());
    title_spans.extend_from_slice(&a.title_spans);
    title_spans.extend_from_slice(&b.title_spans);
    title_spans.sort();

    let mut by_line: BTreeMap<usize, LineMatch> = BTreeMap::new();
    for lm in a.line_matches.iter().chain(&b.line_matches) {
        by_line
            .entry(lm.line_no)
            .and_modify(|existing| existing.spans.extend_from_slice(&lm.spans))
            .or_insert_with(|| lm.clone());
    }

    DocumentMatchResult {
        title: a.title.clone(),
        title_spans,
        line_matches: by_line.into_values().collect(),
        matches: a.matches + b.matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;

    fn line(line_no: usize, text: &str, spans: &[(usize, usize)]) -> LineMatch {
        LineMatch {
            line_no,
            text: text.to_string(),
            spans: spans.iter().copied().map(Span::from).collect(),
        }
    }

    fn result(title_spans: &[(usize, usize)], lines: Vec<LineMatch>) -> DocumentMatchResult {
        let mut r = DocumentMatchResult {
            title: "Sonnet CXVI".to_string(),
            title_spans: title_spans.iter().copied().map(Span::from).collect(),
            line_matches: lines,
            matches: 0,
        };
        r.matches = r.span_count();
        r
    }

    #[test]
    fn test_counts_add() {
        let a = result(&[(0, 2)], vec![line(1, "let me not", &[(0, 3)])]);
        let b = result(&[], vec![line(3, "love is not love", &[(0, 4), (12, 16)])]);
        let combined = combine(&a, &b);
        assert_eq!(combined.matches, 3);
        assert_eq!(combined.matches, combined.span_count());
    }

    #[test]
    fn test_title_spans_sorted_not_deduplicated() {
        let a = result(&[(4, 6), (0, 2)], vec![]);
        let b = result(&[(0, 2)], vec![]);
        let combined = combine(&a, &b);
        assert_eq!(
            combined.title_spans,
            vec![Span::new(0, 2), Span::new(0, 2), Span::new(4, 6)]
        );
    }

    #[test]
    fn test_shared_line_concatenates_spans() {
        let a = result(&[], vec![line(2, "love is not love", &[(12, 16)])]);
        let b = result(&[], vec![line(2, "love is not love", &[(0, 4)])]);
        let combined = combine(&a, &b);
        assert_eq!(combined.line_matches.len(), 1);
        assert_eq!(
            combined.line_matches[0].spans,
            vec![Span::new(12, 16), Span::new(0, 4)]
        );
        assert_eq!(combined.line_matches[0].text, "love is not love");
    }

    #[test]
    fn test_lines_ordered_by_number() {
        let a = result(&[], vec![line(5, "e", &[(0, 1)]), line(9, "i", &[(0, 1)])]);
        let b = result(&[], vec![line(1, "a", &[(0, 1)]), line(7, "g", &[(0, 1)])]);
        let combined = combine(&a, &b);
        let numbers: Vec<usize> = combined.line_matches.iter().map(|lm| lm.line_no).collect();
        assert_eq!(numbers, vec![1, 5, 7, 9]);
    }

    #[test]
    fn test_inputs_untouched() {
        let a = result(&[], vec![line(2, "x", &[(0, 1)])]);
        let b = result(&[], vec![line(2, "x", &[(0, 1)])]);
        let a_before = a.clone();
        let _ = combine(&a, &b);
        let _ = combine(&a, &b);
        assert_eq!(a, a_before);
    }
}
