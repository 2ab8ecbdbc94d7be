//! Sonnet Search - multi-term substring search over an in-memory poem corpus.
//!
//! Queries are split into terms, each term is matched case-insensitively
//! against every document's title and lines, and the per-term results are
//! folded together under AND or OR semantics. Matches can be rendered with
//! highlighting.
//!
//! # Architecture
//!
//! - **models**: Documents, spans and per-document match results
//! - **search**: Span finding, merging/highlighting, matching, combining and query evaluation
//! - **presenter**: Formatting of results for display
//! - **config**: Process configuration from environment variables and persisted search settings
//! - **corpus**: Document suppliers (PoetryDB client, file cache, in-memory)
//! - **metrics**: Timing of corpus loads and queries
//! - **shell**: Interactive command surface
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod corpus;
pub mod error;
pub mod metrics;
pub mod models;
pub mod presenter;
pub mod search;
pub mod shell;

pub use config::{Config, ConfigStore, SearchConfig, SearchMode};
pub use corpus::{CachedCorpus, CorpusOrigin, DocumentSource, LoadedCorpus, PoetryDbClient, StaticSource};
pub use error::{ConfigError, CorpusError, SearchError};
pub use metrics::{Metrics, MetricsSummary, Timer};
pub use models::{Document, DocumentMatchResult, LineMatch, Span};
pub use presenter::{present, present_with_style};
pub use search::{combine, find_spans, match_document, merge_spans, render, HighlightStyle, QueryEngine};
pub use shell::{Command, Reply, Session};
