//! Shared sample corpus for integration tests.

use sonnet_search::Document;

/// Sonnet I, first line only.
#[allow(dead_code)]
pub fn sonnet_i() -> Document {
    Document::new("Sonnet I", ["From fairest creatures we desire increase,"])
}

/// A small corpus with overlapping vocabulary.
#[allow(dead_code)]
pub fn small_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "Sonnet I",
            [
                "From fairest creatures we desire increase,",
                "That thereby beauty's rose might never die,",
            ],
        ),
        Document::new(
            "Sonnet XVIII",
            [
                "Shall I compare thee to a summer's day?",
                "Thou art more lovely and more temperate:",
                "Rough winds do shake the darling buds of May,",
                "And summer's lease hath all too short a date:",
            ],
        ),
        Document::new(
            "Sonnet CXVI",
            [
                "Let me not to the marriage of true minds",
                "Admit impediments. Love is not love",
            ],
        ),
    ]
}

/// PoetryDB-shaped JSON for `small_corpus`.
#[allow(dead_code)]
pub fn small_corpus_json() -> String {
    let docs: Vec<serde_json::Value> = small_corpus()
        .into_iter()
        .map(|d| {
            serde_json::json!({
                "title": d.title,
                "author": "William Shakespeare",
                "lines": d.lines,
                "linecount": d.lines.len().to_string(),
            })
        })
        .collect();
    serde_json::to_string(&docs).unwrap()
}
