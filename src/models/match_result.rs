//! Per-document match results produced by the search pipeline.

use super::Span;
use serde::{Deserialize, Serialize};

/// Matches found on a single line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based line number
    pub line_no: usize,

    /// Original line text (not lowercased)
    pub text: String,

    /// Match spans into `text`, in discovery order
    pub spans: Vec<Span>,
}

/// Everything one document contributed to the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMatchResult {
    /// Original document title
    pub title: String,

    /// Match spans into `title`
    pub title_spans: Vec<Span>,

    /// At most one entry per line, ascending by `line_no`
    pub line_matches: Vec<LineMatch>,

    /// Total number of spans; zero means the document is not in the result set
    pub matches: usize,
}

impl DocumentMatchResult {
    /// A result with no matches for the given title.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_spans: Vec::new(),
            line_matches: Vec::new(),
            matches: 0,
        }
    }

    /// Count the spans actually held by this result.
    ///
    /// Equal to `matches` except for results zeroed by an AND fold, which
    /// keep their spans but report no matches.
    pub fn span_count(&self) -> usize {
        self.title_spans.len()
            + self
                .line_matches
                .iter()
                .map(|lm| lm.spans.len())
                .sum::<usize>()
    }

    /// Whether this document belongs in the result set.
    pub fn is_match(&self) -> bool {
        self.matches > 0
    }
}
