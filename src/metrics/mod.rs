//! Basic timing instrumentation for corpus loading and query evaluation.
//!
//! The search core never measures time; callers wrap work in a [`Timer`] and
//! record the result here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking search performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of queries evaluated
    queries_total: Arc<AtomicU64>,

    /// Total duration of all queries in microseconds
    query_duration_total_us: Arc<AtomicU64>,

    /// Number of documents loaded into the corpus
    documents_loaded_total: Arc<AtomicU64>,

    /// Duration of the most recent corpus load in microseconds
    corpus_load_us: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            queries_total: Arc::new(AtomicU64::new(0)),
            query_duration_total_us: Arc::new(AtomicU64::new(0)),
            documents_loaded_total: Arc::new(AtomicU64::new(0)),
            corpus_load_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a query evaluation with duration.
    pub fn record_query(&self, duration: Duration) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
        self.query_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a corpus load.
    pub fn record_corpus_load(&self, documents: usize, duration: Duration) {
        self.documents_loaded_total
            .fetch_add(documents as u64, Ordering::Relaxed);
        self.corpus_load_us
            .store(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Get total queries evaluated.
    pub fn queries_total(&self) -> u64 {
        self.queries_total.load(Ordering::Relaxed)
    }

    /// Get total query duration in milliseconds.
    pub fn query_duration_total_ms(&self) -> f64 {
        self.query_duration_total_us.load(Ordering::Relaxed) as f64 / 1000.0
    }

    /// Get average query duration in milliseconds.
    pub fn query_duration_avg_ms(&self) -> f64 {
        let count = self.queries_total();
        if count == 0 {
            0.0
        } else {
            self.query_duration_total_ms() / count as f64
        }
    }

    /// Get total documents loaded.
    pub fn documents_loaded_total(&self) -> u64 {
        self.documents_loaded_total.load(Ordering::Relaxed)
    }

    /// Get the most recent corpus load time in milliseconds.
    pub fn corpus_load_ms(&self) -> f64 {
        self.corpus_load_us.load(Ordering::Relaxed) as f64 / 1000.0
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.queries_total.store(0, Ordering::Relaxed);
        self.query_duration_total_us.store(0, Ordering::Relaxed);
        self.documents_loaded_total.store(0, Ordering::Relaxed);
        self.corpus_load_us.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            queries_total: self.queries_total(),
            query_duration_total_ms: self.query_duration_total_ms(),
            query_duration_avg_ms: self.query_duration_avg_ms(),
            documents_loaded_total: self.documents_loaded_total(),
            corpus_load_ms: self.corpus_load_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub queries_total: u64,
    pub query_duration_total_ms: f64,
    pub query_duration_avg_ms: f64,
    pub documents_loaded_total: u64,
    pub corpus_load_ms: f64,
}

/// Wall-clock stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}
