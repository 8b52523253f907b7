use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageTables {
    pub metadata: MetadataTable,
    #[serde(default)]
    pub segmentation: SegmentationTable,
    #[serde(default)]
    pub currency: CurrencyTable,
    #[serde(default)]
    pub magnitudes: BTreeMap<String, String>,
    #[serde(default)]
    pub titles: BTreeMap<String, String>,
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataTable {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentationTable {
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyTable {
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
}

impl LanguageTables {
    /// Tables with no entries, used when the embedded file cannot be read
    pub fn empty(code: &str) -> Self {
        Self {
            metadata: MetadataTable {
                code: code.to_string(),
                name: String::new(),
            },
            ..Default::default()
        }
    }

    /// Spoken name for a currency symbol or prefix/code (case-insensitive for codes)
    pub fn currency_name(&self, key: &str) -> Option<&str> {
        if let Some(name) = self.currency.symbols.get(key) {
            return Some(name);
        }
        let upper = key.to_uppercase();
        self.currency
            .prefixes
            .get(&upper)
            .or_else(|| self.currency.prefixes.get(&upper.replace('$', "")))
            .map(String::as_str)
    }

    /// Spoken word for a scale suffix; unknown suffixes pass through lowercased
    pub fn magnitude_word(&self, suffix: &str) -> String {
        let lower = suffix.to_lowercase();
        self.magnitudes.get(&lower).cloned().unwrap_or(lower)
    }
}
