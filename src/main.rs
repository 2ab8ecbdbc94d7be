//! Sonnet Search - Main entry point
//!
//! Loads the sonnet corpus (from cache or PoetryDB) and runs an interactive
//! search prompt on stdin/stdout.

use anyhow::Result;
use sonnet_search::metrics::{Metrics, Timer};
use sonnet_search::shell::run_repl;
use sonnet_search::{CachedCorpus, Config, ConfigStore, DocumentSource, PoetryDbClient, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Sonnet Search - Shakespeare's sonnets at your fingertips.
Type :help for commands, :quit to exit.";

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so search output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");
    println!("{}", BANNER);

    let store = ConfigStore::new(&config.settings_path);
    let settings = store.load()?;
    info!(
        "Search settings: highlight={}, mode={}",
        settings.highlight, settings.search_mode
    );

    // Load the corpus
    let metrics = Metrics::new();
    let source = CachedCorpus::new(&config.cache_path, PoetryDbClient::new(&config));
    let timer = Timer::start();
    let loaded = match source.load() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load sonnets: {}", e);
            return Err(e.into());
        }
    };
    metrics.record_corpus_load(loaded.documents.len(), timer.elapsed());

    println!("Loading sonnets took {:.3}ms ({:?}).", timer.elapsed_ms(), loaded.origin);
    println!("Loaded {} sonnets.", loaded.documents.len());

    let mut session = Session::new(loaded.documents, settings, Some(store)).with_metrics(metrics);

    let stdin = io::stdin();
    run_repl(&mut session, stdin.lock(), io::stdout().lock())?;

    info!("Sonnet Search shutdown complete");
    Ok(())
}
