//! Configuration management for sonnet search.
//!
//! Process settings (API URL, file locations, timeouts, log level) come from
//! environment variables, with a `.env` file loaded first if present. Search
//! preferences (`SearchConfig`) are persisted separately as a JSON file by
//! [`ConfigStore`].

use crate::error::{ConfigError, ConfigResult, SearchError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// PoetryDB endpoint returning all of Shakespeare's sonnets.
pub const DEFAULT_API_URL: &str = "https://poetrydb.org/author,title/Shakespeare;Sonnet";

/// Configuration for the sonnet search process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus API URL
    pub api_url: String,

    /// Path of the on-disk corpus cache (default: "sonnets.json")
    pub cache_path: PathBuf,

    /// Path of the persisted search settings (default: "config.json")
    pub settings_path: PathBuf,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SONNETS_API_URL`: Corpus endpoint (default: PoetryDB sonnets)
    /// - `SONNETS_CACHE_PATH`: Corpus cache file (default: "sonnets.json")
    /// - `SONNETS_CONFIG_PATH`: Search settings file (default: "config.json")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_url = env::var("SONNETS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SONNETS_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let cache_path = Self::parse_env_path("SONNETS_CACHE_PATH", "sonnets.json")?;
        let settings_path = Self::parse_env_path("SONNETS_CONFIG_PATH", "config.json")?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_url,
            cache_path,
            settings_path,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Read an environment variable as a non-empty path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(_) => Ok(PathBuf::from(default)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            cache_path: PathBuf::from("sonnets.json"),
            settings_path: PathBuf::from("config.json"),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

/// How the results of successive query terms are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    /// Every term must match
    #[default]
    And,
    /// Any term matching is enough
    Or,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(SearchError::InvalidMode(s.to_string())),
        }
    }
}

/// User-facing search preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Highlight matches in output (default: true)
    pub highlight: bool,

    /// Term combination mode (default: AND)
    pub search_mode: SearchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            search_mode: SearchMode::And,
        }
    }
}

/// Loads and saves [`SearchConfig`] as a JSON file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults.
    ///
    /// A missing or unparsable file yields the defaults. Keys absent from
    /// the file take their default individually. A `search_mode` other than
    /// AND/OR is an error.
    pub fn load(&self) -> ConfigResult<SearchConfig> {
        let Some(stored) = self.read_object()? else {
            tracing::debug!("No usable settings at {}, using defaults", self.path.display());
            return Ok(SearchConfig::default());
        };

        let mut config = SearchConfig::default();

        if let Some(value) = stored.get("highlight") {
            config.highlight = value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
                var: "highlight".to_string(),
                reason: format!("Must be true or false, got: {}", value),
            })?;
        }

        if let Some(value) = stored.get("search_mode") {
            let raw = value.as_str().unwrap_or_default();
            config.search_mode = raw.parse().map_err(|e: SearchError| ConfigError::InvalidValue {
                var: "search_mode".to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(config)
    }

    /// Persist settings, keeping any other keys already in the file.
    pub fn save(&self, config: &SearchConfig) -> ConfigResult<()> {
        let mut stored = self.read_object()?.unwrap_or_default();

        if let Value::Object(current) = serde_json::to_value(config)? {
            stored.extend(current);
        }

        let body = serde_json::to_string_pretty(&Value::Object(stored))?;
        fs::write(&self.path, body)?;
        tracing::info!("Saved search settings to {}", self.path.display());
        Ok(())
    }

    /// Read the file as a JSON object; `None` if missing or not an object.
    fn read_object(&self) -> ConfigResult<Option<Map<String, Value>>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let body = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) | Err(_) => {
                tracing::warn!(
                    "Ignoring unreadable settings file {}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }
}
