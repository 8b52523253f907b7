//! Lexicon management commands
//!
//! These edit the JSON file directly. A corrupt file is an error here, while
//! a running pipeline treats it as an empty lexicon.

use crate::error::CliError;
use anyhow::{bail, Result};
use clap::Subcommand;
use sayable_engine::lexicon::{read_entries, write_entries};
use sayable_engine::LexiconEntry;
use std::path::PathBuf;

/// Lexicon subcommands
#[derive(Debug, Subcommand)]
pub enum LexiconCommands {
    /// Show all entries
    List {
        /// Lexicon file
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Add a replacement
    Add {
        /// Lexicon file (created if missing)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Word or phrase to replace
        term: String,

        /// Text to speak instead
        replacement: String,

        /// Only match the term with its exact letter case
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Remove entries by id or term
    Remove {
        /// Lexicon file
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Entry id or term
        key: String,
    },
}

impl LexiconCommands {
    /// Execute the lexicon command
    pub fn execute(&self) -> Result<()> {
        match self {
            LexiconCommands::List { file } => {
                let entries = read_entries(file)?;
                if entries.is_empty() {
                    println!("No lexicon entries in {}", file.display());
                }
                for entry in &entries {
                    println!("{}", describe(entry));
                }
                Ok(())
            }
            LexiconCommands::Add {
                file,
                term,
                replacement,
                case_sensitive,
            } => {
                if term.trim().is_empty() {
                    bail!("term must not be empty");
                }
                let mut entries = read_entries(file)?;
                let mut entry = LexiconEntry::new(term.as_str(), replacement.as_str());
                if *case_sensitive {
                    entry = entry.case_sensitive();
                }
                println!("Added {}", describe(&entry));
                entries.push(entry);
                write_entries(file, &entries)?;
                Ok(())
            }
            LexiconCommands::Remove { file, key } => {
                let mut entries = read_entries(file)?;
                let before = entries.len();
                entries.retain(|entry| entry.id != *key && entry.term != *key);
                let removed = before - entries.len();
                if removed == 0 {
                    return Err(CliError::LexiconEntryNotFound(key.clone()).into());
                }
                write_entries(file, &entries)?;
                println!("Removed {removed} entries");
                Ok(())
            }
        }
    }
}

fn describe(entry: &LexiconEntry) -> String {
    let case = if entry.ignore_case {
        ""
    } else {
        " (case-sensitive)"
    };
    format!(
        "{}\t{} -> {}{case}",
        entry.id, entry.term, entry.replacement
    )
}
