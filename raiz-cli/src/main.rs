//! raiz command-line entry point

use clap::Parser;
use raiz_cli::commands::Commands;
use raiz_cli::CliResult;

/// Spanish stemmer
#[derive(Debug, Parser)]
#[command(name = "raiz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
