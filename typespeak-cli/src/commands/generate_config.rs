//! Generate config command implementation

use crate::config::DEFAULT_LOG_FILE;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use typespeak_core::SegmenterConfig;

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

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Adjust the debounce and logging settings");
        println!("2. Start typing with it:");
        println!("   typespeak type --config {}", self.output.display());

        Ok(())
    }
}

/// Template configuration with every setting at its default
pub fn generate_template() -> String {
    let defaults = SegmenterConfig::default();
    format!(
        r#"# typespeak configuration

[segmenter]
# Quiet period after sentence punctuation before the sentence is dispatched.
# Typing anything but whitespace or more punctuation within this window
# cancels it ("3.14", "e.g."); whitespace confirms the boundary at once.
debounce_ms = {}

# Dispatch the unfinished sentence when the input closes
flush_on_eof = {}

[logging]
# The terminal is in raw mode while typing, so logs always go to a file
file = "{}"

# Level used when neither -v nor RUST_LOG is given
level = "info"
"#,
        defaults.debounce.as_millis(),
        defaults.flush_on_eof,
        DEFAULT_LOG_FILE
    )
}
