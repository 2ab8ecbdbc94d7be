//! Matching a single query term against one document.

use super::spans::{find_spans, fold_case};
use crate::models::{Document, DocumentMatchResult, LineMatch};

/// Match one query term against a document's title and lines.
///
/// The term is case-folded once. Lines without a match are omitted;
/// a document with no matches still yields a result with `matches == 0`.
pub fn match_document(document: &Document, term: &str) -> DocumentMatchResult {
    let pattern = fold_case(term);

    let title_spans = find_spans(&fold_case(&document.title), &pattern);

    let line_matches: Vec<LineMatch> = document
        .numbered_lines()
        .filter_map(|(line_no, line)| {
            let spans = find_spans(&fold_case(line), &pattern);
            (!spans.is_empty()).then(|| LineMatch {
                line_no,
                text: line.to_string(),
                spans,
            })
        })
        .collect();

    let matches = title_spans.len() + line_matches.iter().map(|lm| lm.spans.len()).sum::<usize>();

    DocumentMatchResult {
        title: document.title.clone(),
        title_spans,
        line_matches,
        matches,
    }
}
