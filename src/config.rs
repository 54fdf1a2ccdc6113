//! Configuration primitives for Qualiscout.
//!
//! Stored in a machine-readable TOML file (path supplied by the caller,
//! `qualiscout.toml` in the working directory by default). The config covers
//! the catalog location, the literature search endpoint, and the report
//! synthesis endpoint. The synthesis API key is deliberately not part of the
//! file; it is read from the environment at call time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable consulted for the synthesis API key.
pub const API_KEY_ENV: &str = "QUALISCOUT_API_KEY";
/// Fallback environment variable, for installs that already export one.
pub const API_KEY_ENV_FALLBACK: &str = "OPENAI_API_KEY";

/// Root configuration for one install.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog source settings.
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Literature search settings (endpoint, timeout, result bounds).
    #[serde(default)]
    pub literature: LiteratureSettings,
    /// Report synthesis settings (endpoint, model, determinism control).
    #[serde(default)]
    pub synthesis: SynthesisSettings,
}

/// Where the journal catalog lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/journal_catalog.csv")
}

/// Knobs for the bibliographic search boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteratureSettings {
    /// Works-search endpoint base URL.
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    /// Transport timeout for the single search request, in seconds.
    #[serde(default = "default_search_timeout_secs")]
    pub timeout_secs: u64,
    /// Smallest number of results a caller may request.
    #[serde(default = "default_min_results")]
    pub min_results: usize,
    /// Largest number of results a caller may request.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Result count used when the caller does not specify one.
    #[serde(default = "default_result_count")]
    pub default_results: usize,
}

impl Default for LiteratureSettings {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            timeout_secs: default_search_timeout_secs(),
            min_results: default_min_results(),
            max_results: default_max_results(),
            default_results: default_result_count(),
        }
    }
}

impl LiteratureSettings {
    /// Clamp a requested result count into the configured bounds.
    pub fn clamp_result_count(&self, requested: usize) -> usize {
        requested.clamp(self.min_results, self.max_results)
    }
}

fn default_search_endpoint() -> String {
    "https://api.crossref.org/works".to_string()
}

const fn default_search_timeout_secs() -> u64 {
    20
}

const fn default_min_results() -> usize {
    5
}

const fn default_max_results() -> usize {
    20
}

const fn default_result_count() -> usize {
    10
}

/// Knobs for the report synthesis boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisSettings {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_synthesis_endpoint")]
    pub endpoint: String,
    /// Model identifier passed through to the endpoint.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Kept low so the report stays close to the
    /// supplied data.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Transport timeout in seconds. The synthesis call has no in-scope
    /// deadline semantics, but a hung endpoint must not wedge the process.
    #[serde(default = "default_synthesis_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            endpoint: default_synthesis_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_synthesis_timeout_secs(),
        }
    }
}

fn default_synthesis_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

const fn default_temperature() -> f64 {
    0.2
}

const fn default_synthesis_timeout_secs() -> u64 {
    120
}

/// Load the config from `path`, or fall back to defaults when the file does
/// not exist. A present-but-malformed file is an error.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Resolve the synthesis API key from the environment.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .or_else(|_| std::env::var(API_KEY_ENV_FALLBACK))
        .ok()
        .filter(|key| !key.trim().is_empty())
}
