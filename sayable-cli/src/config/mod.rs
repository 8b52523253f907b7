//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use sayable_api::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Language value that asks for per-file detection
pub const AUTO_LANGUAGE: &str = "auto";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexicon configuration
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Language tag of the input, or `auto` to detect it per file
    pub language: String,

    /// Upper bound on chunk length in characters
    pub max_chunk_len: usize,

    /// Insert spaces lost when web layouts are flattened
    pub layout_repair: bool,

    /// Break scraped navigation runs into sentences
    pub break_navigation_runs: bool,

    /// Read remaining digits as words
    pub expand_numerals: bool,

    /// Number of worker threads (0 = one per CPU)
    pub worker_threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_chunk_len: sayable_engine::MAX_CHUNK_LEN,
            layout_repair: true,
            break_navigation_runs: false,
            expand_numerals: true,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Lexicon-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct LexiconConfig {
    /// JSON lexicon applied before the built-in rules
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline or the output stage cannot honor
    pub fn validate(&self) -> Result<()> {
        self.pipeline_config()?;
        match self.output.default_format.as_str() {
            "text" | "json" | "markdown" => Ok(()),
            other => Err(CliError::ConfigError(format!("unknown output format '{other}'")).into()),
        }
    }

    /// Pipeline configuration built from the `[processing]` and `[lexicon]`
    /// tables. The pipeline always normalizes English; `language` only tags
    /// the input.
    pub fn pipeline_config(&self) -> Result<Config> {
        let processing = &self.processing;
        if processing.language.trim().is_empty() {
            return Err(CliError::ConfigError("language must not be empty".to_string()).into());
        }
        let mut builder = Config::builder()
            .max_chunk_len(processing.max_chunk_len)
            .layout_repair(processing.layout_repair)
            .break_navigation_runs(processing.break_navigation_runs)
            .expand_numerals(processing.expand_numerals);
        if let Some(path) = &self.lexicon.path {
            builder = builder.lexicon(path);
        }
        let config = builder.build().map_err(CliError::from)?;
        Ok(config)
    }

    /// Worker thread count with `0` resolved to the CPU count
    pub fn threads(&self) -> usize {
        match self.processing.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
