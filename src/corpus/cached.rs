//! File cache in front of the PoetryDB client.

use super::{parse_documents, CorpusOrigin, DocumentSource, LoadedCorpus, PoetryDbClient};
use crate::error::CorpusResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads the corpus from a JSON cache file, downloading it on first use.
#[derive(Clone)]
pub struct CachedCorpus {
    cache_path: PathBuf,
    client: PoetryDbClient,
}

impl CachedCorpus {
    pub fn new(cache_path: impl Into<PathBuf>, client: PoetryDbClient) -> Self {
        Self {
            cache_path: cache_path.into(),
            client,
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }
}

impl DocumentSource for CachedCorpus {
    /// Read the cache if it exists; otherwise fetch and write it.
    ///
    /// A corrupt cache file is an error rather than a silent re-download.
    fn load(&self) -> CorpusResult<LoadedCorpus> {
        if self.cache_path.exists() {
            let body = fs::read_to_string(&self.cache_path)?;
            let documents = parse_documents(&body)?;
            tracing::info!("Loaded sonnets from the cache at {}", self.cache_path.display());
            return Ok(LoadedCorpus {
                documents,
                origin: CorpusOrigin::Cache,
            });
        }

        let documents = self.client.fetch_documents()?;
        fs::write(&self.cache_path, serde_json::to_string_pretty(&documents)?)?;
        tracing::info!(
            "Downloaded sonnets from PoetryDB and cached them at {}",
            self.cache_path.display()
        );

        Ok(LoadedCorpus {
            documents,
            origin: CorpusOrigin::Remote,
        })
    }
}
