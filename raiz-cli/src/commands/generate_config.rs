//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Commented configuration template with every key at its default
pub const CONFIG_TEMPLATE: &str = r#"# raiz configuration
#
# Every section and key is optional; missing values use the defaults shown.
# Command-line flags take precedence over this file.

[processing]
# Emit an empty stem for blank input lines instead of skipping them
keep_blank_lines = false

# Number of words at which stemming switches to parallel
parallel_threshold = 10000

[output]
# Default output format: "text", "json" or "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true

[performance]
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for stemming:");
        println!("   raiz stem -i words.txt -c {}", self.output.display());

        Ok(())
    }
}
