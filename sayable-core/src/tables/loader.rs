use super::types::LanguageTables;
use crate::error::{CoreError, Result};
use std::sync::OnceLock;
use tracing::warn;

static ENGLISH_TABLES: OnceLock<LanguageTables> = OnceLock::new();

const ENGLISH_TOML: &str = include_str!("../../configs/english.toml");

/// Parse a table file and check that it declares the expected language code.
pub fn parse_tables(code: &str, toml_content: &str) -> Result<LanguageTables> {
    let tables: LanguageTables = toml::from_str(toml_content).map_err(|e| CoreError::TableParse {
        name: code.to_string(),
        reason: e.to_string(),
    })?;

    if tables.metadata.code != code {
        return Err(CoreError::CodeMismatch {
            expected: code.to_string(),
            actual: tables.metadata.code,
        });
    }

    Ok(tables)
}

/// Built-in English tables, parsed once per process.
///
/// A broken embedded file degrades to empty tables rather than failing every
/// normalization call.
pub fn english() -> &'static LanguageTables {
    ENGLISH_TABLES.get_or_init(|| match parse_tables("en", ENGLISH_TOML) {
        Ok(tables) => tables,
        Err(e) => {
            warn!("falling back to empty English tables: {e}");
            LanguageTables::empty("en")
        }
    })
}
