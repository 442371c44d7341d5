//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod check;
pub mod generate_config;
pub mod stem;

use stem::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem words from arguments, files or stdin
    Stem(stem::StemArgs),

    /// Compare stems of a vocabulary with a list of expected stems
    Check(check::CheckArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Stem(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Run the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, help) in format_descriptions() {
                    println!("  {name:<10} {help}");
                }
            }
        }
        Ok(())
    }
}

/// Name and help text of every output format
pub fn format_descriptions() -> Vec<(String, String)> {
    OutputFormat::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .map(|value| {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            (value.get_name().to_string(), help)
        })
        .collect()
}

/// Initialize logging based on verbosity level
///
/// Does nothing when `quiet` is set or a logger is already installed.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
