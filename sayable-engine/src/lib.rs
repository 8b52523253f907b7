//! Orchestration for speech-synthesis text normalization
//!
//! This crate wires the core transforms into the per-chunk pipeline, owns the
//! user lexicon (the only shared mutable state), and plans documents into
//! indexed chunks.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod normalizer;
pub mod plan;

// Re-export key types
pub use config::NormalizerConfig;
pub use error::{EngineError, Result};
pub use language::{detect_language, is_english, LanguageTag};
pub use lexicon::{Lexicon, LexiconEntry, LexiconStore, TermResolver};
pub use normalizer::{normalize, Normalizer};
pub use plan::{ChunkPlan, PlannedChunk};

// Re-export from core for convenience
pub use sayable_core::{split_into_chunks, SentenceUnit, MAX_CHUNK_LEN};
