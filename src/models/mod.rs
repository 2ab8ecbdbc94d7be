//! Data models for the sonnet corpus and search results.
//!
//! This module contains the document shape supplied by the corpus and the
//! span and match structures produced while evaluating a query.

pub mod document;
pub mod match_result;
pub mod span;

pub use document::Document;
pub use match_result::{DocumentMatchResult, LineMatch};
pub use span::Span;
