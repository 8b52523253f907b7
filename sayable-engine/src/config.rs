//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::language::is_english;
use sayable_core::MAX_CHUNK_LEN;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Normalizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Language tag whose text gets normalized; must be an English tag
    /// because the rule tables are English. Other tags pass through.
    pub source_language: String,
    /// Upper bound on chunk length in characters
    pub max_chunk_len: usize,
    /// Insert spaces lost when web layouts are flattened
    pub layout_repair: bool,
    /// Break scraped navigation runs (`Subscribe`, `Sign In`, ...) into sentences
    pub break_navigation_runs: bool,
    /// Read remaining digits as words in the final pass
    pub expand_numerals: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            max_chunk_len: MAX_CHUNK_LEN,
            layout_repair: true,
            break_navigation_runs: false,
            expand_numerals: true,
        }
    }
}

impl NormalizerConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Reject values the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_len == 0 {
            return Err(EngineError::ConfigError(
                "max_chunk_len must be greater than 0".to_string(),
            ));
        }
        if self.source_language.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "source_language must not be empty".to_string(),
            ));
        }
        if !is_english(&self.source_language) {
            return Err(EngineError::ConfigError(format!(
                "source_language '{}' is not supported; only English text is normalized",
                self.source_language
            )));
        }
        Ok(())
    }

    /// Configuration tuned for text scraped from news pages
    pub fn web_article() -> Self {
        Self {
            break_navigation_runs: true,
            ..Self::default()
        }
    }
}
