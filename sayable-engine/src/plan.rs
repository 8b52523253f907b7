//! Chunk planning
//!
//! A plan fixes the chunk list for a document up front. Playback progress is
//! tracked by chunk index, which is what a resumed session starts from; it can
//! differ from the sentence count because short sentences are packed together
//! and long ones are split.

use sayable_core::{ChunkAssembler, Segmenter};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One chunk of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedChunk {
    /// Position in the plan, starting at 0
    pub index: usize,
    /// Raw (not yet normalized) chunk text
    pub text: String,
}

/// Ordered chunks for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPlan {
    chunks: Vec<PlannedChunk>,
}

impl ChunkPlan {
    /// Segment and pack `text` into chunks of at most `max_len` characters.
    pub fn build(text: &str, max_len: usize) -> Self {
        let segments = Segmenter::shared().segment(text);
        let chunks: Vec<PlannedChunk> = ChunkAssembler::new(max_len)
            .assemble(&segments)
            .into_iter()
            .enumerate()
            .map(|(index, text)| PlannedChunk { index, text })
            .collect();
        debug!(
            segments = segments.len(),
            chunks = chunks.len(),
            max_len,
            "planned chunks"
        );
        Self { chunks }
    }

    /// Plan from already assembled chunk texts
    pub fn from_chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chunks: chunks
                .into_iter()
                .enumerate()
                .map(|(index, text)| PlannedChunk {
                    index,
                    text: text.into(),
                })
                .collect(),
        }
    }

    /// Number of chunks
    pub fn total(&self) -> usize {
        self.chunks.len()
    }

    /// True when the document produced no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk at `index`
    pub fn get(&self, index: usize) -> Option<&PlannedChunk> {
        self.chunks.get(index)
    }

    /// All chunks in order
    pub fn chunks(&self) -> &[PlannedChunk] {
        &self.chunks
    }

    /// Chunks from `index` on; empty when `index` is past the end.
    pub fn from_index(&self, index: usize) -> impl Iterator<Item = &PlannedChunk> {
        self.chunks.iter().skip(index)
    }
}
