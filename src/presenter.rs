//! Formatting of query results for display.

use crate::models::{DocumentMatchResult, Span};
use crate::search::{render, HighlightStyle};

/// Summary line: matched count, corpus size, query and optional timing.
pub fn summary_line(query: &str, matched: usize, total: usize, elapsed_ms: Option<f64>) -> String {
    let mut line = format!("{} out of {} sonnets contain \"{}\".", matched, total, query);
    if let Some(ms) = elapsed_ms {
        line.push_str(&format!(" Your query took {:.2}ms.", ms));
    }
    line
}

/// Render results as output lines using ANSI highlighting.
pub fn present(
    query: &str,
    results: &[DocumentMatchResult],
    highlight: bool,
    elapsed_ms: Option<f64>,
) -> Vec<String> {
    present_with_style(query, results, highlight.then_some(HighlightStyle::ANSI), elapsed_ms)
}

/// Render results as output lines.
///
/// Only documents with `matches > 0` are shown, in corpus order, numbered
/// `[i/total]`. Each shown document lists its title followed by its matched
/// lines as `  [nn] text`. With `style == None` text is emitted unmodified.
pub fn present_with_style(
    query: &str,
    results: &[DocumentMatchResult],
    style: Option<HighlightStyle>,
    elapsed_ms: Option<f64>,
) -> Vec<String> {
    let total = results.len();
    let matched: Vec<&DocumentMatchResult> = results.iter().filter(|r| r.matches > 0).collect();

    let mut out = vec![summary_line(query, matched.len(), total, elapsed_ms)];

    let paint = |text: &str, spans: &[Span]| match style {
        Some(style) => render(text, spans, style),
        None => text.to_string(),
    };

    for (idx, result) in matched.iter().enumerate() {
        out.push(String::new());
        out.push(format!(
            "[{}/{}] {}",
            idx + 1,
            total,
            paint(&result.title, &result.title_spans)
        ));
        for lm in &result.line_matches {
            out.push(format!("  [{:2}] {}", lm.line_no, paint(&lm.text, &lm.spans)));
        }
    }

    out
}
