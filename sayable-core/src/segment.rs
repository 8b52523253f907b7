//! Sentence segmentation
//!
//! A segment ends at `.`, `!`, `?` (plus any closing quotes or brackets) when
//! whitespace follows and the next sentence opens with an upper-case letter or
//! a digit, optionally behind an opening quote or bracket. A `;` followed by
//! whitespace always ends a segment.
//!
//! Periods inside known abbreviations (`Mr.`, `e.g.`, `U.S.`) are masked
//! before scanning, so the segment text is always an exact slice of the input.

use crate::tables;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

static SHARED: OnceLock<Segmenter> = OnceLock::new();

/// A segment of the input together with where it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    pub text: String,
    /// Byte offset of `text` within the segmented input
    pub original_offset: usize,
}

#[derive(Debug, Clone)]
pub struct Segmenter {
    abbreviations: Option<Regex>,
}

impl Segmenter {
    /// Build a segmenter that never splits inside the given abbreviations.
    ///
    /// Abbreviations are matched case-insensitively at a word start.
    pub fn new<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        let mut terms: Vec<&str> = abbreviations
            .iter()
            .map(AsRef::as_ref)
            .filter(|term| !term.trim().is_empty())
            .collect();
        if terms.is_empty() {
            return Self {
                abbreviations: None,
            };
        }
        // Longest first so `Mrs.` wins over `Mr.`
        terms.sort_by_key(|term| std::cmp::Reverse(term.len()));
        let alternation = terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");

        let abbreviations = match Regex::new(&format!(r"(?i)\b(?:{alternation})")) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("abbreviation guard disabled: {e}");
                None
            }
        };
        Self { abbreviations }
    }

    /// Process-wide segmenter over the built-in English abbreviation list.
    pub fn shared() -> &'static Segmenter {
        SHARED.get_or_init(|| Self::new(&tables::english().segmentation.abbreviations))
    }

    /// Split text into trimmed, non-empty segments.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segment_units(text)
            .into_iter()
            .map(|unit| unit.text)
            .collect()
    }

    /// Split text into segments, keeping each segment's offset in `text`.
    pub fn segment_units(&self, text: &str) -> Vec<SentenceUnit> {
        let protected = self.protected_periods(text);
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut units = Vec::new();
        let mut segment_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !is_terminator(ch) || protected.binary_search(&pos).is_ok() {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            if j < chars.len() && chars[j].1.is_whitespace() {
                let mut k = j;
                while k < chars.len() && chars[k].1.is_whitespace() {
                    k += 1;
                }
                if k < chars.len() && (ch == ';' || starts_sentence(&chars[k..])) {
                    push_unit(&mut units, text, segment_start, chars[j].0);
                    segment_start = chars[k].0;
                    i = k;
                    continue;
                }
            }
            i = j;
        }

        push_unit(&mut units, text, segment_start, text.len());
        units
    }

    /// Sorted byte positions of periods that belong to an abbreviation.
    fn protected_periods(&self, text: &str) -> Vec<usize> {
        let Some(regex) = &self.abbreviations else {
            return Vec::new();
        };
        regex
            .find_iter(text)
            .flat_map(|m| {
                m.as_str()
                    .match_indices('.')
                    .map(move |(offset, _)| m.start() + offset)
            })
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::shared().clone()
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | ';')
}

fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '”' | '’' | ')' | ']' | '}')
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '“' | '‘' | '(' | '[' | '{')
}

fn starts_sentence(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|&(_, ch)| ch)
        .find(|&ch| !is_opener(ch))
        .is_some_and(|ch| ch.is_uppercase() || ch.is_ascii_digit())
}

fn push_unit(units: &mut Vec<SentenceUnit>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim_start();
    let offset = start + (slice.len() - trimmed.len());
    let trimmed = trimmed.trim_end();
    if !trimmed.is_empty() {
        units.push(SentenceUnit {
            text: trimmed.to_string(),
            original_offset: offset,
        });
    }
}

/// Segment with the built-in English abbreviation list.
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::shared().segment(text)
}
