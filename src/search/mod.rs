//! Substring search over the sonnet corpus.
//!
//! The pipeline runs leaves first: [`spans`] finds raw matches, [`matcher`]
//! builds a per-document result for one term, [`combine`] folds two results
//! together, [`engine`] drives the fold across all terms, and [`highlight`]
//! merges spans and renders them for display.

pub mod combine;
pub mod engine;
pub mod highlight;
pub mod matcher;
pub mod spans;

pub use combine::combine;
pub use engine::{split_terms, QueryEngine};
pub use highlight::{merge_spans, render, HighlightStyle};
pub use matcher::match_document;
pub use spans::{find_spans, fold_case};
