//! Stem command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use raiz_api::{Config, ExecutionMode, Input, Output, Stemmer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Words to stem (default: read from --input or stdin)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns, one word per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel stemming even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Emit an empty stem for blank input lines
    #[arg(long)]
    pub keep_blank_lines: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

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
    /// Plain text with one stem per line
    Text,
    /// JSON array of {word, stem} objects
    Json,
    /// Markdown word/stem table
    Markdown,
}

impl StemArgs {
    /// Execute the stem command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting stemming");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.resolve_format(&cli_config)?;
        let stemmer = Stemmer::with_config(self.api_config(&cli_config)?)?;

        let threads = stemmer.config().threads.unwrap_or_else(num_cpus::get);
        log::info!("Using up to {threads} worker threads");

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;

        if !self.words.is_empty() {
            let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
            let output = stemmer.process_words(&words);
            write_entries(formatter.as_mut(), &output)?;
        } else if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to stem", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                log::debug!(
                    "Reading {} ({} bytes)",
                    path.display(),
                    FileReader::file_size(path)?
                );
                let text = FileReader::read_text(path)?;
                let output = stemmer
                    .process(Input::from_text(text))
                    .with_context(|| format!("Failed to stem {}", path.display()))?;
                log_metadata(&output);
                write_entries(formatter.as_mut(), &output)?;
                progress.file_completed(&path.display().to_string(), output.entries.len());
            }

            progress.finish();
        } else {
            log::info!("Reading words from stdin");
            let output = stemmer
                .process(Input::from_reader(io::stdin()))
                .context("Failed to stem standard input")?;
            log_metadata(&output);
            write_entries(formatter.as_mut(), &output)?;
        }

        formatter.finish()
    }

    /// Build the API configuration; flags win over the config file
    fn api_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let config = Config::builder()
            .execution_mode(mode)
            .threads(self.threads.or(cli_config.performance.threads()))
            .parallel_threshold(cli_config.processing.parallel_threshold)
            .keep_blank_lines(self.keep_blank_lines || cli_config.processing.keep_blank_lines)
            .build()?;

        Ok(config)
    }

    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &cli_config.output.default_format;
        OutputFormat::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
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
            OutputFormat::Json => Box::new(JsonFormatter::with_pretty(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

fn write_entries(formatter: &mut dyn OutputFormatter, output: &Output) -> Result<()> {
    for entry in &output.entries {
        formatter.format_entry(&entry.word, &entry.stem)?;
    }
    Ok(())
}

fn log_metadata(output: &Output) {
    let metadata = &output.metadata;
    log::info!(
        "Stemmed {} words ({} bytes) in {} ms, {} mode on {} thread(s)",
        metadata.total_words,
        metadata.total_bytes,
        metadata.processing_time_ms,
        metadata.mode_used,
        metadata.thread_count
    );
}
