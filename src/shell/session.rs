//! One interactive search session over a loaded corpus.

use super::commands::Command;
use crate::config::{ConfigStore, SearchConfig};
use crate::metrics::{Metrics, Timer};
use crate::models::Document;
use crate::presenter::present;
use crate::search::QueryEngine;

pub const HELP: &str = "Commands:
  :help                   Show this help
  :highlight on|off       Toggle highlighting of matches
  :search-mode AND|OR     Require all terms (AND) or any term (OR)
  :quit                   Exit
Anything else is searched for. Separate terms with spaces.";

/// Output of handling one input line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    /// Lines to print, in order
    pub lines: Vec<String>,

    /// Whether the session should end
    pub quit: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            quit: false,
        }
    }
}

/// Holds the corpus and current settings for an interactive session.
pub struct Session {
    documents: Vec<Document>,
    settings: SearchConfig,
    store: Option<ConfigStore>,
    metrics: Metrics,
}

impl Session {
    /// Create a session. Settings changes are persisted through `store` if given.
    pub fn new(documents: Vec<Document>, settings: SearchConfig, store: Option<ConfigStore>) -> Self {
        Self {
            documents,
            settings,
            store,
            metrics: Metrics::new(),
        }
    }

    /// Use an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Handle one raw input line.
    pub fn handle(&mut self, raw: &str) -> Reply {
        match Command::parse(raw) {
            Command::Empty => Reply::default(),
            Command::Quit => Reply {
                lines: vec!["Bye.".to_string()],
                quit: true,
            },
            Command::Help => Reply::line(HELP),
            Command::Highlight(on) => {
                self.settings.highlight = on;
                let mut reply = Reply::line(format!("Highlighting {}", if on { "ON" } else { "OFF" }));
                reply.lines.extend(self.persist());
                reply
            }
            Command::SearchMode(mode) => {
                self.settings.search_mode = mode;
                let mut reply = Reply::line(format!("Search mode set to {}", mode));
                reply.lines.extend(self.persist());
                reply
            }
            Command::Usage(usage) => Reply::line(usage),
            Command::Unknown(cmd) => {
                tracing::debug!("Unknown command: {}", cmd);
                Reply::line("Unknown command. Type :help for commands.")
            }
            Command::Query(query) => self.query(&query),
        }
    }

    /// Evaluate a query with the current settings.
    pub fn query(&self, query: &str) -> Reply {
        let timer = Timer::start();
        let engine = QueryEngine::new(&self.documents);

        match engine.search(query, self.settings.search_mode) {
            Ok(results) => {
                let elapsed = timer.elapsed();
                self.metrics.record_query(elapsed);
                Reply {
                    lines: present(
                        query,
                        &results,
                        self.settings.highlight,
                        Some(elapsed.as_secs_f64() * 1000.0),
                    ),
                    quit: false,
                }
            }
            Err(e) => Reply::line(e.to_string()),
        }
    }

    /// Save settings; returns a message only on failure.
    fn persist(&self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.save(&self.settings) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("Failed to save settings to {}: {}", store.path().display(), e);
                Some(format!("Could not save settings: {}", e))
            }
        }
    }
}
