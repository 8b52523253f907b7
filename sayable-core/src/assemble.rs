//! Packing segments into bounded chunks
//!
//! Segments are joined greedily with single spaces while the chunk stays
//! within the limit. A segment that is too long on its own is split at commas;
//! where such a cut lands on a comma, the comma becomes a period so the
//! synthesized speech closes the clause.

use crate::segment::Segmenter;
use regex::Regex;
use std::sync::LazyLock;

/// Default upper bound on chunk length, in characters.
pub const MAX_CHUNK_LEN: usize = 300;

static CLAUSE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s+").expect("clause break pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAssembler {
    max_len: usize,
}

impl Default for ChunkAssembler {
    fn default() -> Self {
        Self::new(MAX_CHUNK_LEN)
    }
}

impl ChunkAssembler {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Greedily pack segments into chunks of at most `max_len` characters.
    ///
    /// A single clause longer than the limit is emitted on its own rather
    /// than cut mid-word.
    pub fn assemble<S: AsRef<str>>(&self, segments: &[S]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = Packer::new(self.max_len);

        for segment in segments {
            let segment = segment.as_ref().trim();
            if segment.is_empty() {
                continue;
            }
            if char_len(segment) > self.max_len {
                if let Some(chunk) = current.take() {
                    chunks.push(chunk);
                }
                self.split_oversized(segment, &mut chunks);
                continue;
            }
            if let Some(full) = current.push(segment) {
                chunks.push(full);
            }
        }

        if let Some(chunk) = current.take() {
            chunks.push(chunk);
        }
        chunks
    }

    fn split_oversized(&self, segment: &str, chunks: &mut Vec<String>) {
        let mut current = Packer::new(self.max_len);
        for part in clauses(segment) {
            if let Some(full) = current.push(part) {
                chunks.push(close_clause(&full));
            }
        }
        if let Some(chunk) = current.take() {
            chunks.push(chunk);
        }
    }
}

/// Greedy accumulator shared by segment and clause packing.
struct Packer {
    max_len: usize,
    text: String,
    len: usize,
}

impl Packer {
    fn new(max_len: usize) -> Self {
        Self {
            max_len,
            text: String::new(),
            len: 0,
        }
    }

    /// Append `piece`; returns the previous contents if they had to be flushed.
    fn push(&mut self, piece: &str) -> Option<String> {
        let piece_len = char_len(piece);
        if self.text.is_empty() {
            self.text.push_str(piece);
            self.len = piece_len;
            return None;
        }
        if self.len + 1 + piece_len <= self.max_len {
            self.text.push(' ');
            self.text.push_str(piece);
            self.len += 1 + piece_len;
            return None;
        }
        let full = std::mem::replace(&mut self.text, piece.to_string());
        self.len = piece_len;
        Some(full)
    }

    fn take(&mut self) -> Option<String> {
        self.len = 0;
        let text = std::mem::take(&mut self.text);
        (!text.is_empty()).then_some(text)
    }
}

/// Split at `,` followed by whitespace, keeping the comma on the left part.
fn clauses(segment: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in CLAUSE_BREAK.find_iter(segment) {
        parts.push(&segment[last..m.start() + 1]);
        last = m.end();
    }
    if last < segment.len() {
        parts.push(&segment[last..]);
    }
    parts
}

/// Turn a trailing comma into a period. A Title-case word right before it is
/// lower-cased unless it follows another period.
fn close_clause(piece: &str) -> String {
    let Some(body) = piece.trim_end().strip_suffix(',') else {
        return piece.to_string();
    };

    let word_start = body
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_alphabetic())
        .last()
        .map(|(i, _)| i);

    let mut out = String::with_capacity(body.len() + 1);
    match word_start {
        Some(start) if should_lowercase(&body[..start], &body[start..]) => {
            out.push_str(&body[..start]);
            let mut chars = body[start..].chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_lowercase());
            }
            out.push_str(chars.as_str());
        }
        _ => out.push_str(body),
    }
    out.push('.');
    out
}

fn should_lowercase(before: &str, word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    word.chars().count() > 1
        && first.is_uppercase()
        && chars.all(|ch| !ch.is_uppercase())
        && !before.ends_with('.')
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Segment `text` with the built-in English rules and pack the result into
/// chunks of at most [`MAX_CHUNK_LEN`] characters.
pub fn split_into_chunks(text: &str) -> Vec<String> {
    ChunkAssembler::default().assemble(&Segmenter::shared().segment(text))
}
