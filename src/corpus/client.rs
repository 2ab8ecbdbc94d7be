//! HTTP client for the PoetryDB API.

use super::parse_documents;
use crate::config::Config;
use crate::error::{CorpusError, CorpusResult};
use crate::metrics::Timer;
use crate::models::Document;
use std::sync::Arc;
use std::time::Duration;

/// Synchronous PoetryDB client built on `ureq`.
#[derive(Clone)]
pub struct PoetryDbClient {
    /// Endpoint returning the corpus as a JSON array
    url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl PoetryDbClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config.api_url.clone(), Duration::from_secs(config.request_timeout))
    }

    /// Create a client for a custom URL (useful for testing).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_timeout(url.into(), Duration::from_secs(10))
    }

    fn with_timeout(url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            url,
            agent: Arc::new(agent),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download all documents.
    pub fn fetch_documents(&self) -> CorpusResult<Vec<Document>> {
        let timer = Timer::start();
        tracing::debug!("GET {}", self.url);

        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_error)?;

        let body = response
            .into_string()
            .map_err(|e| CorpusError::HttpError(e.to_string()))?;

        let documents = parse_documents(&body)?;
        tracing::info!(
            "Fetched {} documents from {} in {:.2}ms",
            documents.len(),
            self.url,
            timer.elapsed_ms()
        );
        Ok(documents)
    }
}

/// Map a ureq error to a CorpusError.
fn map_error(error: ureq::Error) -> CorpusError {
    match error {
        ureq::Error::Status(status, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            CorpusError::ApiError { status, message }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                CorpusError::HttpError("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                CorpusError::Timeout
            } else {
                CorpusError::HttpError(transport.to_string())
            }
        }
    }
}
