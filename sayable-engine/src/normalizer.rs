//! Per-chunk normalization pipeline
//!
//! Order is fixed: lexicon, layout repair, currency, lexical rules, numerals.
//! The lexicon runs first so user overrides win over every built-in rule.

use crate::config::NormalizerConfig;
use crate::language::is_english;
use crate::lexicon::{LexiconStore, TermResolver};
use sayable_core::numeral::expand_numerals;
use sayable_core::{CurrencyNormalizer, LayoutRepair, LexicalRules};
use std::sync::Arc;
use tracing::trace;

/// Normalize orchestrator
pub struct Normalizer {
    config: NormalizerConfig,
    resolver: Arc<dyn TermResolver>,
    layout: &'static LayoutRepair,
    currency: &'static CurrencyNormalizer,
    lexical: &'static LexicalRules,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Normalizer without user lexicon entries
    pub fn new(config: NormalizerConfig) -> Self {
        Self::with_resolver(config, Arc::new(LexiconStore::default()))
    }

    /// Normalizer that consults `resolver` before the built-in rules
    pub fn with_resolver(config: NormalizerConfig, resolver: Arc<dyn TermResolver>) -> Self {
        Self {
            layout: LayoutRepair::shared(config.break_navigation_runs),
            currency: CurrencyNormalizer::shared(),
            lexical: LexicalRules::shared(),
            config,
            resolver,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize one chunk for speech.
    ///
    /// The rule tables are English, so text tagged with any other language
    /// is returned unchanged, as is an empty tag.
    pub fn normalize(&self, chunk: &str, language_tag: &str) -> String {
        if !self.handles_language(language_tag) {
            return chunk.to_string();
        }

        let text = self.resolver.resolve(chunk);
        let text = if self.config.layout_repair {
            self.layout.repair(&text)
        } else {
            text
        };
        let text = self.currency.normalize(&text);
        let text = self.lexical.apply(&text);
        let text = if self.config.expand_numerals {
            expand_numerals(&text)
        } else {
            text
        };

        trace!(input = chunk, output = %text, "normalized chunk");
        text
    }

    /// Whether text tagged `language_tag` is rewritten rather than passed
    /// through.
    pub fn handles_language(&self, language_tag: &str) -> bool {
        !language_tag.trim().is_empty() && is_english(language_tag)
    }
}

/// Normalize a chunk with the default configuration and no lexicon.
pub fn normalize(chunk: &str, language_tag: &str) -> String {
    static DEFAULT: std::sync::OnceLock<Normalizer> = std::sync::OnceLock::new();
    DEFAULT.get_or_init(Normalizer::default).normalize(chunk, language_tag)
}
