//! Public API for Sayable speech text normalization
//!
//! This crate provides a stable interface for turning written text into
//! length-bounded chunks a speech engine can read aloud, hiding the rule
//! tables and lexicon plumbing underneath.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod session;

use error::Result;
use sayable_engine::{ChunkPlan, LexiconStore, Normalizer};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, NormalizedChunk, Output};
pub use error::ApiError;
pub use sayable_engine::{detect_language, LanguageTag, LexiconEntry};
pub use session::{Progress, Session, SinkResult, SynthesisSink};

/// Main entry point: split text into chunks and normalize them
pub struct Pipeline {
    normalizer: Arc<Normalizer>,
    lexicon: Arc<LexiconStore>,
    config: Config,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Create a pipeline with default configuration (English, no lexicon)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a pipeline for a specific source language
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.normalizer().validate()?;
        let lexicon = Arc::new(match config.lexicon_path() {
            Some(path) => LexiconStore::open(path),
            None => LexiconStore::default(),
        });
        let normalizer = Arc::new(Normalizer::with_resolver(
            config.normalizer().clone(),
            lexicon.clone(),
        ));

        Ok(Self {
            normalizer,
            lexicon,
            config,
        })
    }

    /// Process input tagged with the configured source language
    pub fn process(&self, input: Input) -> Result<Output> {
        let language = self.config.language().to_string();
        self.process_with_language(input, &language)
    }

    /// Process input whose text is in `language_tag`; text in any other
    /// language than the source language is chunked but left unchanged.
    pub fn process_with_language(&self, input: Input, language_tag: &str) -> Result<Output> {
        let start = Instant::now();
        let text = input.read_text()?;

        let chunks: Vec<NormalizedChunk> = self
            .plan(&text)
            .chunks()
            .iter()
            .map(|planned| NormalizedChunk {
                index: planned.index,
                source: planned.text.clone(),
                text: self.normalizer.normalize(&planned.text, language_tag),
            })
            .collect();

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            chunk_count: chunks.len(),
            language: language_tag.to_string(),
            normalized: self.normalizer.handles_language(language_tag),
            lexicon_entries: self.lexicon.snapshot().active_len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            chunks = metadata.chunk_count,
            language = language_tag,
            "processed input"
        );

        Ok(Output { chunks, metadata })
    }

    /// Process input after guessing its language from the text itself
    pub fn process_detected(&self, input: Input, hint: &str) -> Result<Output> {
        let text = input.read_text()?;
        let language = detect_language(&text, hint);
        self.process_with_language(Input::Text(text), language.code())
    }

    /// Plan `text` into indexed chunks without normalizing
    pub fn plan(&self, text: &str) -> ChunkPlan {
        ChunkPlan::build(text, self.config.max_chunk_len())
    }

    /// Raw chunk texts for `text`
    pub fn split(&self, text: &str) -> Vec<String> {
        self.plan(text)
            .chunks()
            .iter()
            .map(|planned| planned.text.clone())
            .collect()
    }

    /// Normalize a single chunk
    pub fn normalize(&self, chunk: &str, language_tag: &str) -> String {
        self.normalizer.normalize(chunk, language_tag)
    }

    /// Start a synthesis session over `text`
    pub fn session(&self, text: &str, language_tag: &str) -> Session {
        Session::new(self.plan(text), self.normalizer.clone(), language_tag)
    }

    /// The lexicon consulted before the built-in rules
    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// Re-read the lexicon file; returns the number of entries loaded
    pub fn reload_lexicon(&self) -> usize {
        self.lexicon.reload()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Split and normalize English text with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    Pipeline::new()?.process(Input::from_text(text))
}

/// Split and normalize a UTF-8 file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    Pipeline::new()?.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Split and normalize text written in `lang_code`
pub fn process_text_with_language(text: &str, lang_code: &str) -> Result<Output> {
    Pipeline::new()?.process_with_language(Input::from_text(text), lang_code)
}

/// Split text into chunks of at most 300 characters
pub fn split_into_chunks(text: &str) -> Vec<String> {
    sayable_engine::split_into_chunks(text)
}

/// Normalize one chunk with default configuration
pub fn normalize(chunk: &str, language_tag: &str) -> String {
    sayable_engine::normalize(chunk, language_tag)
}
