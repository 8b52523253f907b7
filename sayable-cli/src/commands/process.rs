//! Process command implementation

use crate::config::{CliConfig, AUTO_LANGUAGE};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use sayable_api::{Input, NormalizedChunk, Pipeline};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language tag of the input text, or `auto` to detect it per file
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// JSON lexicon applied before the built-in rules
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print chunks without normalizing them
    #[arg(long)]
    pub chunks_only: bool,

    /// Worker threads (default: from config, else one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of `{index, source, text}` objects
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in a config file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let mut cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        if let Some(lexicon) = &self.lexicon {
            if !lexicon.exists() {
                log::warn!("Lexicon {} does not exist yet", lexicon.display());
            }
            cli_config.lexicon.path = Some(lexicon.clone());
        }
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| cli_config.processing.language.clone());
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        let pipeline =
            Pipeline::with_config(cli_config.pipeline_config()?).map_err(CliError::from)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} input files", files.len());

        let threads = self.threads.unwrap_or_else(|| cli_config.threads()).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let results: Vec<Result<Vec<NormalizedChunk>>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let chunks = self.process_file(&pipeline, path, &language)?;
                    progress.file_completed(&path.display().to_string(), chunks.len());
                    Ok(chunks)
                })
                .collect()
        });
        progress.finish();

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;
        for chunks in results {
            for chunk in &chunks? {
                formatter.format_chunk(chunk)?;
            }
        }
        formatter.finish()?;

        Ok(())
    }

    fn process_file(
        &self,
        pipeline: &Pipeline,
        path: &Path,
        language: &str,
    ) -> Result<Vec<NormalizedChunk>> {
        let text = FileReader::read_text(path)?;

        if self.chunks_only {
            return Ok(pipeline
                .plan(&text)
                .chunks()
                .iter()
                .map(|planned| NormalizedChunk {
                    index: planned.index,
                    source: planned.text.clone(),
                    text: planned.text.clone(),
                })
                .collect());
        }

        let output = if language == AUTO_LANGUAGE {
            pipeline.process_detected(Input::Text(text), "en")
        } else {
            pipeline.process_with_language(Input::Text(text), language)
        }
        .map_err(CliError::from)?;

        log::info!(
            "{}: {} chunks as '{}'{}",
            path.display(),
            output.metadata.chunk_count,
            output.metadata.language,
            if output.metadata.normalized {
                ""
            } else {
                " (not normalized)"
            }
        );
        Ok(output.chunks)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &Path, output: &Path) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.display().to_string()],
            output: Some(output.to_path_buf()),
            format: None,
            language: None,
            lexicon: None,
            config: None,
            chunks_only: false,
            threads: Some(1),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_name("Markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_name("yaml").is_err());
    }

    #[test]
    fn test_execute_writes_normalized_text() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "It cost $5. Call 911 now.").unwrap();

        args(&input, &output).execute().unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "It cost five dollars. Call nine one one now.\n"
        );
    }

    #[test]
    fn test_chunks_only_keeps_source() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "It cost $5.").unwrap();

        let mut args = args(&input, &output);
        args.chunks_only = true;
        args.execute().unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "It cost $5.\n");
    }

    #[test]
    fn test_auto_language_leaves_other_languages() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "¿Cuánto cuesta? Son $5.").unwrap();

        let mut args = args(&input, &output);
        args.language = Some("auto".to_string());
        args.execute().unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "¿Cuánto cuesta? Son $5.\n"
        );
    }
}
