//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# Sayable configuration

[processing]
# Language tag of the input text, or "auto" to detect it per file.
# Only English text is normalized; other languages are chunked unchanged.
language = "en"

# Maximum chunk length in characters
max_chunk_len = 300

# Insert spaces lost when web page layouts are flattened ("economyIMF")
layout_repair = true

# Break scraped navigation runs ("Subscribe", "Sign In", ...) into sentences
break_navigation_runs = false

# Read remaining digits as words
expand_numerals = true

# Worker threads for multi-file runs (0 = one per CPU)
worker_threads = 0

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[lexicon]
# JSON array of {"term": ..., "replacement": ...} objects applied before the
# built-in rules. Manage it with `sayable lexicon add|remove|list`.
# path = "lexicon.json"
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   sayable validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   sayable process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        assert_eq!(CliConfig::from_toml_str(TEMPLATE).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sayable.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[processing]"));
        assert!(content.contains("max_chunk_len = 300"));
    }
}
