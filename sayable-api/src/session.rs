//! Resumable synthesis sessions
//!
//! A session walks a fixed chunk plan and hands each normalized chunk to a
//! sink. Cancellation is only observed between chunks, so a sink call is
//! never interrupted; the returned [`Progress`] names the chunk to resume
//! from.

use crate::dto::NormalizedChunk;
use crate::error::{ApiError, Result};
use sayable_engine::{ChunkPlan, Normalizer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of speaking one chunk; the error is the backend's reason.
pub type SinkResult = std::result::Result<(), String>;

/// Receives normalized chunks in order, e.g. a speech engine.
pub trait SynthesisSink {
    /// Speak one chunk. An error stops the session at this chunk.
    fn speak(&mut self, chunk: &NormalizedChunk) -> SinkResult;
}

impl<F> SynthesisSink for F
where
    F: FnMut(&NormalizedChunk) -> SinkResult,
{
    fn speak(&mut self, chunk: &NormalizedChunk) -> SinkResult {
        self(chunk)
    }
}

/// Where a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// First chunk that has not been spoken
    pub next_index: usize,
    /// Chunks in the plan
    pub total: usize,
    /// True when every chunk up to the end was spoken
    pub completed: bool,
}

/// A planned document bound to a normalizer and a language tag
pub struct Session {
    plan: ChunkPlan,
    normalizer: Arc<Normalizer>,
    language: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("total", &self.plan.total())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session over an existing plan
    pub fn new(plan: ChunkPlan, normalizer: Arc<Normalizer>, language: impl Into<String>) -> Self {
        Self {
            plan,
            normalizer,
            language: language.into(),
        }
    }

    /// The chunk plan
    pub fn plan(&self) -> &ChunkPlan {
        &self.plan
    }

    /// Number of chunks
    pub fn total(&self) -> usize {
        self.plan.total()
    }

    /// Normalize chunk `index`, or `None` past the end
    pub fn chunk(&self, index: usize) -> Option<NormalizedChunk> {
        self.plan.get(index).map(|planned| NormalizedChunk {
            index: planned.index,
            source: planned.text.clone(),
            text: self.normalizer.normalize(&planned.text, &self.language),
        })
    }

    /// Speak chunks from `start_index` on until the plan ends or `cancel`
    /// is set.
    pub fn run(
        &self,
        sink: &mut dyn SynthesisSink,
        start_index: usize,
        cancel: &AtomicBool,
    ) -> Result<Progress> {
        let total = self.plan.total();
        debug!(start_index, total, "session started");

        for planned in self.plan.from_index(start_index) {
            if cancel.load(Ordering::Acquire) {
                info!(next_index = planned.index, total, "session cancelled");
                return Ok(Progress {
                    next_index: planned.index,
                    total,
                    completed: false,
                });
            }

            let chunk = NormalizedChunk {
                index: planned.index,
                source: planned.text.clone(),
                text: self.normalizer.normalize(&planned.text, &self.language),
            };
            sink.speak(&chunk).map_err(|reason| ApiError::Sink {
                index: chunk.index,
                reason,
            })?;
        }

        debug!(total, "session completed");
        Ok(Progress {
            next_index: total,
            total,
            completed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(chunks: &[&str]) -> Session {
        Session::new(
            ChunkPlan::from_chunks(chunks.iter().copied()),
            Arc::new(Normalizer::default()),
            "en",
        )
    }

    #[test]
    fn test_run_to_completion() {
        let session = session(&["It cost $5.", "Call 911."]);
        let mut spoken = Vec::new();
        let mut sink = |chunk: &NormalizedChunk| -> SinkResult {
            spoken.push(chunk.text.clone());
            Ok(())
        };
        let progress = session
            .run(&mut sink, 0, &AtomicBool::new(false))
            .unwrap();

        assert_eq!(
            progress,
            Progress {
                next_index: 2,
                total: 2,
                completed: true
            }
        );
        assert_eq!(spoken, vec!["It cost five dollars.", "Call nine one one."]);
    }

    #[test]
    fn test_cancel_between_chunks() {
        let session = session(&["One.", "Two.", "Three."]);
        let cancel = AtomicBool::new(false);
        let mut seen = Vec::new();
        let mut sink = |chunk: &NormalizedChunk| -> SinkResult {
            seen.push(chunk.index);
            if chunk.index == 1 {
                cancel.store(true, Ordering::Release);
            }
            Ok(())
        };
        let progress = session.run(&mut sink, 0, &cancel).unwrap();

        assert_eq!(seen, vec![0, 1]);
        assert_eq!(progress.next_index, 2);
        assert!(!progress.completed);
    }

    #[test]
    fn test_resume_from_index() {
        let session = session(&["One.", "Two.", "Three."]);
        let mut seen = Vec::new();
        let mut sink = |chunk: &NormalizedChunk| -> SinkResult {
            seen.push(chunk.source.clone());
            Ok(())
        };
        let progress = session
            .run(&mut sink, 2, &AtomicBool::new(false))
            .unwrap();
        assert_eq!(seen, vec!["Three."]);
        assert!(progress.completed);

        let mut ignore = |_: &NormalizedChunk| -> SinkResult { Ok(()) };
        let progress = session
            .run(&mut ignore, 9, &AtomicBool::new(false))
            .unwrap();
        assert_eq!(progress.next_index, 3);
        assert!(progress.completed);
    }

    #[test]
    fn test_sink_error_reports_index() {
        let session = session(&["One.", "Two."]);
        let mut sink = |chunk: &NormalizedChunk| -> SinkResult {
            if chunk.index == 1 {
                Err("device busy".to_string())
            } else {
                Ok(())
            }
        };
        let err = session
            .run(&mut sink, 0, &AtomicBool::new(false))
            .unwrap_err();
        assert!(matches!(err, ApiError::Sink { index: 1, .. }));
    }
}
