//! Document suppliers for the search core.
//!
//! The core only sees a `&[Document]`. This module provides the sources that
//! produce it: the PoetryDB HTTP client, a file cache in front of it, and an
//! in-memory source.

mod cached;
mod client;

pub use cached::CachedCorpus;
pub use client::PoetryDbClient;

use crate::error::{CorpusError, CorpusResult};
use crate::models::Document;
use serde_json::Value;

/// Where a loaded corpus came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusOrigin {
    /// Read from the on-disk cache
    Cache,
    /// Downloaded from the remote API
    Remote,
    /// Supplied in memory
    Memory,
}

/// Documents plus their origin.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub documents: Vec<Document>,
    pub origin: CorpusOrigin,
}

/// Supplies the corpus before any query runs.
///
/// Implementations may hit the network or the filesystem; the documents
/// they return are treated as read-only by the search core.
pub trait DocumentSource {
    /// Load every document.
    fn load(&self) -> CorpusResult<LoadedCorpus>;
}

/// A fixed, in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: Vec<Document>,
}

impl StaticSource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl DocumentSource for StaticSource {
    fn load(&self) -> CorpusResult<LoadedCorpus> {
        Ok(LoadedCorpus {
            documents: self.documents.clone(),
            origin: CorpusOrigin::Memory,
        })
    }
}

/// Decode a JSON array of documents.
///
/// PoetryDB reports lookup failures as a `{"status": ..., "reason": ...}`
/// object with a 200 response, so that shape is mapped to an API error.
/// Records missing `title` or `lines` fail the whole load.
pub fn parse_documents(body: &str) -> CorpusResult<Vec<Document>> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value::<Document>(item).map_err(|e| {
                    CorpusError::MalformedDocument(format!("document {}: {}", idx, e))
                })
            })
            .collect(),
        Value::Object(obj) if obj.contains_key("status") => Err(CorpusError::ApiError {
            status: obj
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|s| u16::try_from(s).ok())
                .unwrap_or(0),
            message: obj
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
        }),
        other => Err(CorpusError::MalformedDocument(format!(
            "expected a JSON array of documents, got: {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
