//! User lexicon: literal term overrides applied before any other rule
//!
//! Entries persist as a JSON array of `{id, term, replacement, ignoreCase}`
//! objects. A [`LexiconStore`] keeps one compiled, immutable [`Lexicon`]
//! snapshot; reloads and saves build a new snapshot and swap it in, so a
//! reader always sees either the old or the new entry list in full.

use crate::error::{EngineError, Result};
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Applies caller-supplied term replacements to text.
pub trait TermResolver: Send + Sync {
    /// Rewrite every whole-word occurrence of the known terms.
    fn resolve(&self, text: &str) -> String;
}

/// One user-defined replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    /// Stable identifier
    #[serde(default = "new_id")]
    pub id: String,
    /// Text to look for, matched as a whole word
    pub term: String,
    /// Text inserted verbatim in place of the term
    pub replacement: String,
    /// Match regardless of letter case
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_ignore_case() -> bool {
    true
}

impl LexiconEntry {
    /// Case-insensitive entry with a fresh id
    pub fn new(term: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            term: term.into(),
            replacement: replacement.into(),
            ignore_case: true,
        }
    }

    /// Match the term with its exact letter case only
    pub fn case_sensitive(mut self) -> Self {
        self.ignore_case = false;
        self
    }

    fn compile(&self) -> Result<Regex> {
        RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&self.term)))
            .case_insensitive(self.ignore_case)
            .build()
            .map_err(|e| EngineError::InvalidTerm {
                term: self.term.clone(),
                reason: e.to_string(),
            })
    }
}

/// An immutable, compiled set of entries
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    rules: Vec<(Regex, String)>,
}

impl Lexicon {
    /// Compile entries in order. Blank terms and terms that fail to compile
    /// are kept in the entry list but never match.
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        let mut rules = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.term.trim().is_empty() {
                continue;
            }
            match entry.compile() {
                Ok(regex) => rules.push((regex, entry.replacement.clone())),
                Err(e) => warn!("skipping lexicon entry {}: {e}", entry.id),
            }
        }
        debug!(
            entries = entries.len(),
            active = rules.len(),
            "compiled lexicon"
        );
        Self { entries, rules }
    }

    /// A lexicon without entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// All entries, in application order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Number of entries that take part in matching
    pub fn active_len(&self) -> usize {
        self.rules.len()
    }

    /// True when no entry can match
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every entry in order; later entries see earlier replacements.
    pub fn apply(&self, text: &str) -> String {
        if self.rules.is_empty() {
            return text.to_string();
        }
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (regex, replacement)| {
                regex
                    .replace_all(&acc, NoExpand(replacement.as_str()))
                    .into_owned()
            })
    }
}

impl TermResolver for Lexicon {
    fn resolve(&self, text: &str) -> String {
        self.apply(text)
    }
}

/// Read entries from a lexicon file. A missing file is an empty lexicon.
pub fn read_entries(path: &Path) -> Result<Vec<LexiconEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|e| EngineError::Lexicon {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|e| EngineError::Lexicon {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write entries atomically: a uniquely named temp file next to `path`,
/// then a rename over it.
pub fn write_entries(path: &Path, entries: &[LexiconEntry]) -> Result<()> {
    let lexicon_error = |e: std::io::Error| EngineError::Lexicon {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(lexicon_error)?;
            parent
        }
        None => Path::new("."),
    };
    let json = serde_json::to_string_pretty(entries)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(lexicon_error)?;
    tmp.write_all(json.as_bytes()).map_err(lexicon_error)?;
    tmp.persist(path).map_err(|e| lexicon_error(e.error))?;
    Ok(())
}

/// Persistent lexicon with an atomically swapped snapshot
///
/// Writers (`reload`, `save`, `add`, `remove`) are serialized, so a
/// read-modify-write never loses a concurrent update.
#[derive(Debug)]
pub struct LexiconStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<Lexicon>>,
    writer: Mutex<()>,
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::in_memory(Vec::new())
    }
}

impl LexiconStore {
    /// Load the lexicon at `path`. Unreadable or corrupt files yield an
    /// empty lexicon and a warning; normalization must keep working.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = load_or_warn(&path);
        Self {
            path: Some(path),
            current: RwLock::new(Arc::new(Lexicon::new(entries))),
            writer: Mutex::new(()),
        }
    }

    /// A store that is never persisted
    pub fn in_memory(entries: Vec<LexiconEntry>) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(Lexicon::new(entries))),
            writer: Mutex::new(()),
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The active lexicon. Holding the snapshot never blocks a reload.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries of the active lexicon
    pub fn entries(&self) -> Vec<LexiconEntry> {
        self.snapshot().entries().to_vec()
    }

    /// Re-read the backing file and swap in the result. Returns the number
    /// of loaded entries.
    pub fn reload(&self) -> usize {
        let Some(path) = &self.path else {
            return self.snapshot().entries().len();
        };
        let _writer = self.lock_writer();
        let entries = load_or_warn(path);
        let count = entries.len();
        self.swap(Lexicon::new(entries));
        info!("reloaded {count} lexicon entries from {}", path.display());
        count
    }

    /// Replace all entries, persisting them first when the store has a file.
    pub fn save(&self, entries: Vec<LexiconEntry>) -> Result<()> {
        let _writer = self.lock_writer();
        self.persist(entries)
    }

    /// Append an entry and save.
    pub fn add(&self, entry: LexiconEntry) -> Result<()> {
        let _writer = self.lock_writer();
        let mut entries = self.entries();
        entries.push(entry);
        self.persist(entries)
    }

    /// Remove entries whose id or term equals `key`. Returns how many were
    /// removed.
    pub fn remove(&self, key: &str) -> Result<usize> {
        let _writer = self.lock_writer();
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|entry| entry.id != key && entry.term != key);
        let removed = before - entries.len();
        if removed > 0 {
            self.persist(entries)?;
        }
        Ok(removed)
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Caller holds the writer lock.
    fn persist(&self, entries: Vec<LexiconEntry>) -> Result<()> {
        if let Some(path) = &self.path {
            write_entries(path, &entries)?;
        }
        self.swap(Lexicon::new(entries));
        Ok(())
    }

    fn swap(&self, lexicon: Lexicon) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(lexicon);
    }
}

impl TermResolver for LexiconStore {
    fn resolve(&self, text: &str) -> String {
        self.snapshot().apply(text)
    }
}

fn load_or_warn(path: &Path) -> Vec<LexiconEntry> {
    match read_entries(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("ignoring lexicon: {e}");
            Vec::new()
        }
    }
}
