//! Multi-term query evaluation across the corpus.

use super::combine::combine;
use super::matcher::match_document;
use crate::config::SearchMode;
use crate::error::{SearchError, SearchResult};
use crate::models::{Document, DocumentMatchResult};

/// Split a raw query into whitespace-delimited terms, in input order.
pub fn split_terms(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Evaluates queries against a borrowed, read-only corpus.
///
/// Holds no state between calls; every `run` builds its own accumulator.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    documents: &'a [Document],
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over the given documents.
    pub fn new(documents: &'a [Document]) -> Self {
        Self { documents }
    }

    /// Number of documents in the corpus.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Split `query` into terms and evaluate them.
    pub fn search(&self, query: &str, mode: SearchMode) -> SearchResult<Vec<DocumentMatchResult>> {
        self.run(&split_terms(query), mode)
    }

    /// Evaluate `terms` as a left fold under `mode`.
    ///
    /// Returns one result per document, in corpus order. Under AND, a
    /// document that misses a term has its `matches` forced to zero while
    /// its earlier spans are kept; only `matches` decides membership.
    pub fn run<S: AsRef<str>>(
        &self,
        terms: &[S],
        mode: SearchMode,
    ) -> SearchResult<Vec<DocumentMatchResult>> {
        let (first, rest) = terms.split_first().ok_or(SearchError::EmptyQuery)?;

        let mut accumulated = self.match_all(first.as_ref());

        for term in rest {
            let term_results = self.match_all(term.as_ref());

            for (acc, new) in accumulated.iter_mut().zip(&term_results) {
                match mode {
                    SearchMode::And => {
                        if acc.matches > 0 && new.matches > 0 {
                            *acc = combine(acc, new);
                        } else {
                            acc.matches = 0;
                        }
                    }
                    SearchMode::Or => *acc = combine(acc, new),
                }
            }
        }

        tracing::debug!(
            "Evaluated {} term(s) in {} mode: {} of {} documents matched",
            terms.len(),
            mode,
            accumulated.iter().filter(|r| r.matches > 0).count(),
            accumulated.len()
        );

        Ok(accumulated)
    }

    fn match_all(&self, term: &str) -> Vec<DocumentMatchResult> {
        self.documents
            .iter()
            .map(|doc| match_document(doc, term))
            .collect()
    }
}
