//! Embedded word tables (currency names, abbreviations, titles, scales)

mod loader;
mod types;

pub use loader::{english, parse_tables};
pub use types::{CurrencyTable, LanguageTables, MetadataTable, SegmentationTable};
