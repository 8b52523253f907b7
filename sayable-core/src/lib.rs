//! Text normalization and chunking for speech synthesis
//!
//! This crate holds the pure, language-specific transforms that turn raw
//! article text into something a TTS model reads naturally:
//!
//! - **Layout repair**: spaces lost when web layouts are flattened
//! - **Currency**: `£800m ($1.08bn)` to spoken amounts
//! - **Lexical rules**: units, magnitudes, ordinals, years, titles
//! - **Numerals**: remaining digits to words
//! - **Segmentation and chunking**: abbreviation-aware sentences packed into
//!   bounded chunks
//!
//! Every transform is a total function over `&str`: text it does not
//! recognize passes through unchanged. Rule chains are built once per process
//! and are safe to share between threads.
//!
//! # Example
//!
//! ```rust
//! use sayable_core::{split_into_chunks, CurrencyNormalizer, LexicalRules};
//! use sayable_core::numeral::expand_numerals;
//!
//! let text = CurrencyNormalizer::shared().normalize("It cost $5.");
//! let text = LexicalRules::shared().apply(&text);
//! assert_eq!(expand_numerals(&text), "It cost five dollars.");
//!
//! let chunks = split_into_chunks("Mr. Smith arrived. He left.");
//! assert_eq!(chunks, vec!["Mr. Smith arrived. He left."]);
//! ```

pub mod assemble;
pub mod currency;
pub mod error;
pub mod layout;
pub mod lexical;
pub mod numeral;
pub mod rule;
pub mod segment;
pub mod tables;

pub use assemble::{split_into_chunks, ChunkAssembler, MAX_CHUNK_LEN};
pub use currency::CurrencyNormalizer;
pub use error::{CoreError, Result};
pub use layout::LayoutRepair;
pub use lexical::{ordinal_words, LexicalRules};
pub use rule::{Rule, RuleChain};
pub use segment::{Segmenter, SentenceUnit};
pub use tables::LanguageTables;
