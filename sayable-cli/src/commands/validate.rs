//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use sayable_engine::lexicon::read_entries;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(anyhow::anyhow!("Validation failed: {e:#}"));
            }
        };

        println!("✓ Configuration is valid!");
        println!("  Language: {}", config.processing.language);
        println!("  Max chunk length: {}", config.processing.max_chunk_len);
        println!("  Output format: {}", config.output.default_format);

        if let Some(path) = &config.lexicon.path {
            match read_entries(path) {
                Ok(entries) => println!("  Lexicon: {} entries", entries.len()),
                Err(e) => {
                    println!("✗ Lexicon is invalid!");
                    println!("  Error: {e}");
                    return Err(anyhow::anyhow!("Validation failed: {e}"));
                }
            }
        }

        Ok(())
    }
}
