//! High-level configuration API

use crate::error::{ApiError, Result};
use sayable_engine::NormalizerConfig;
use std::path::{Path, PathBuf};

/// High-level configuration for a normalization pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) inner: NormalizerConfig,
    pub(crate) lexicon: Option<PathBuf>,
}

impl Config {
    /// Configuration for text scraped from web pages
    pub fn web_article() -> Self {
        Self {
            inner: NormalizerConfig::web_article(),
            lexicon: None,
        }
    }

    /// Configuration that only splits and rewrites symbols, leaving digits
    pub fn digits_kept() -> Self {
        Self {
            inner: NormalizerConfig {
                expand_numerals: false,
                ..NormalizerConfig::default()
            },
            lexicon: None,
        }
    }

    /// Load the normalizer settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            inner: NormalizerConfig::from_file(path)?,
            lexicon: None,
        })
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language tag whose text is normalized
    pub fn language(&self) -> &str {
        &self.inner.source_language
    }

    /// Chunk length bound in characters
    pub fn max_chunk_len(&self) -> usize {
        self.inner.max_chunk_len
    }

    /// Persisted lexicon file, if any
    pub fn lexicon_path(&self) -> Option<&Path> {
        self.lexicon.as_deref()
    }

    /// Engine-level settings
    pub fn normalizer(&self) -> &NormalizerConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the source language tag. Only English tags pass `build`.
    pub fn language(mut self, language: impl Into<String>) -> Result<Self> {
        let language = language.into();
        if language.trim().is_empty() {
            return Err(ApiError::Config("language must not be empty".to_string()));
        }
        self.config.inner.source_language = language;
        Ok(self)
    }

    /// Set the chunk length bound
    pub fn max_chunk_len(mut self, len: usize) -> Self {
        self.config.inner.max_chunk_len = len;
        self
    }

    /// Toggle layout repair
    pub fn layout_repair(mut self, enabled: bool) -> Self {
        self.config.inner.layout_repair = enabled;
        self
    }

    /// Toggle breaking of scraped navigation runs
    pub fn break_navigation_runs(mut self, enabled: bool) -> Self {
        self.config.inner.break_navigation_runs = enabled;
        self
    }

    /// Toggle the final digits-to-words pass
    pub fn expand_numerals(mut self, enabled: bool) -> Self {
        self.config.inner.expand_numerals = enabled;
        self
    }

    /// Use the lexicon persisted at `path`
    pub fn lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon = Some(path.into());
        self
    }

    /// Replace the engine settings wholesale
    pub fn normalizer(mut self, config: NormalizerConfig) -> Self {
        self.config.inner = config;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.inner.validate()?;
        Ok(self.config)
    }
}
