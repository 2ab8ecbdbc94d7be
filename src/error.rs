//! Error types for sonnet search.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while evaluating a query.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Search mode other than AND or OR
    #[error("Invalid search mode: {0} (expected AND or OR)")]
    InvalidMode(String),

    /// Query contained no terms
    #[error("Query contains no search terms")]
    EmptyQuery,

    /// Document violates the title/lines shape
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Variable or config key has an invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Reading or writing the settings file failed
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be serialized
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading the corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Cache file could not be read or written
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is JSON but a document lacks title or lines
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CorpusError
pub type CorpusResult<T> = Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidMode("XOR".to_string());
        assert_eq!(err.to_string(), "Invalid search mode: XOR (expected AND or OR)");

        let err = SearchError::EmptyQuery;
        assert_eq!(err.to_string(), "Query contains no search terms");

        let err = ConfigError::MissingVar("SONNETS_API_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: SONNETS_API_URL"
        );

        let err = CorpusError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");
    }

    #[test]
    fn test_api_error_variants() {
        let err = CorpusError::ApiError {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }
}
