//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use sayable_api::LanguageTag;

pub mod generate_config;
pub mod lexicon;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into chunks and normalize them for speech
    Process(process::ProcessArgs),

    /// Manage a user lexicon file
    Lexicon {
        #[command(subcommand)]
        subcommand: lexicon::LexiconCommands,
    },

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Lexicon { subcommand } => subcommand.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Supported languages:");
                for tag in LanguageTag::supported() {
                    let mode = if tag.is_normalized() {
                        "normalized"
                    } else {
                        "chunked only"
                    };
                    println!("  {:<4}{:<12}{mode}", tag.code(), tag.name());
                }
                println!("  auto detect per file");
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      one chunk per line");
                println!("  json      array of {{index, source, text}} objects");
                println!("  markdown  numbered list");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_commands_run() {
        assert!(Commands::List {
            subcommand: ListCommands::Formats
        }
        .execute()
        .is_ok());
    }
}
