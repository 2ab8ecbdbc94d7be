//! Integration tests for the corpus suppliers using mockito for HTTP mocking.

use mockito::Server;
use sonnet_search::{CachedCorpus, CorpusError, CorpusOrigin, DocumentSource, PoetryDbClient};
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_fetch_documents() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/sonnets")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(small_corpus_json())
        .create();

    let client = PoetryDbClient::with_url(format!("{}/sonnets", server.url()));
    let docs = client.fetch_documents().unwrap();

    mock.assert();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[1].title, "Sonnet XVIII");
    assert_eq!(docs[1].author.as_deref(), Some("William Shakespeare"));
    assert_eq!(docs[1].lines.len(), 4);
}

#[test]
fn test_fetch_documents_http_error() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/sonnets")
        .with_status(500)
        .with_body("upstream unavailable")
        .create();

    let client = PoetryDbClient::with_url(format!("{}/sonnets", server.url()));
    let result = client.fetch_documents();

    mock.assert();
    match result {
        Err(CorpusError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_fetch_documents_not_found_payload() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/sonnets")
        .with_status(200)
        .with_body(r#"{"status": 404, "reason": "Not found"}"#)
        .create();

    let client = PoetryDbClient::with_url(format!("{}/sonnets", server.url()));
    assert!(matches!(
        client.fetch_documents(),
        Err(CorpusError::ApiError { status: 404, .. })
    ));
}

#[test]
fn test_fetch_documents_malformed() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/sonnets")
        .with_status(200)
        .with_body(r#"[{"title": "Sonnet I"}]"#)
        .create();

    let client = PoetryDbClient::with_url(format!("{}/sonnets", server.url()));
    assert!(matches!(
        client.fetch_documents(),
        Err(CorpusError::MalformedDocument(_))
    ));
}

#[test]
fn test_cached_corpus_downloads_once() {
    let mut server = Server::new();
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("sonnets.json");

    let mock = server
        .mock("GET", "/sonnets")
        .with_status(200)
        .with_body(small_corpus_json())
        .expect(1)
        .create();

    let source = CachedCorpus::new(
        &cache_path,
        PoetryDbClient::with_url(format!("{}/sonnets", server.url())),
    );

    let first = source.load().unwrap();
    assert_eq!(first.origin, CorpusOrigin::Remote);
    assert!(cache_path.exists());

    let second = source.load().unwrap();
    assert_eq!(second.origin, CorpusOrigin::Cache);
    assert_eq!(second.documents, first.documents);

    mock.assert();
}

#[test]
fn test_cached_corpus_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("sonnets.json");
    fs::write(&cache_path, small_corpus_json()).unwrap();

    // Unroutable URL: the cache must be used without touching the network
    let source = CachedCorpus::new(&cache_path, PoetryDbClient::with_url("http://127.0.0.1:9/none"));
    let loaded = source.load().unwrap();

    assert_eq!(loaded.origin, CorpusOrigin::Cache);
    let expected: Vec<_> = small_corpus()
        .into_iter()
        .map(|mut d| {
            d.author = Some("William Shakespeare".to_string());
            d
        })
        .collect();
    assert_eq!(loaded.documents, expected);
}

#[test]
fn test_cached_corpus_corrupt_file_is_error() {
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("sonnets.json");
    fs::write(&cache_path, "[{").unwrap();

    let source = CachedCorpus::new(&cache_path, PoetryDbClient::with_url("http://127.0.0.1:9/none"));
    assert!(matches!(source.load(), Err(CorpusError::Json(_))));
}
