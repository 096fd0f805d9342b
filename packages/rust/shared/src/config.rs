//! Application configuration for timeline-enrich.
//!
//! User config lives at `~/.timeline-enrich/timeline-enrich.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "timeline-enrich.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".timeline-enrich";

// ---------------------------------------------------------------------------
// Config structs (matching timeline-enrich.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input/output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Enrichment settings.
    #[serde(default)]
    pub enrichment: EnrichmentSettings,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Timeline document to enrich.
    #[serde(default = "default_timeline_path")]
    pub timeline: String,

    /// Where to write the enriched document. Defaults to `timeline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            timeline: default_timeline_path(),
            output: None,
        }
    }
}

fn default_timeline_path() -> String {
    "assets/data/timeline-data.json".into()
}

/// `[enrichment]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentSettings {
    /// Provenance label written into each enhanced work's `corpus_sources`.
    #[serde(default = "default_corpus_source")]
    pub corpus_source: String,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            corpus_source: default_corpus_source(),
        }
    }
}

fn default_corpus_source() -> String {
    "dr-cortes-rag-corpus/extracted/blog_posts/".into()
}

// ---------------------------------------------------------------------------
// Enrich config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime enrichment configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Document to read.
    pub timeline_path: PathBuf,
    /// Document to write. Same as `timeline_path` unless overridden.
    pub output_path: PathBuf,
    /// Label for `corpus_sources`.
    pub corpus_source: String,
    /// Merge and report without writing.
    pub dry_run: bool,
}

impl From<&AppConfig> for EnrichConfig {
    fn from(config: &AppConfig) -> Self {
        let timeline_path = PathBuf::from(&config.paths.timeline);
        let output_path = config
            .paths
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| timeline_path.clone());
        Self {
            timeline_path,
            output_path,
            corpus_source: config.enrichment.corpus_source.clone(),
            dry_run: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.timeline-enrich/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| TimelineError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.timeline-enrich/timeline-enrich.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TimelineError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| TimelineError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| TimelineError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| TimelineError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| TimelineError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
