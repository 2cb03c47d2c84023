//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub mod generate_config;
pub mod interactive;
pub mod say;
pub mod stats;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Type in raw mode; each finished sentence is dispatched while you type
    #[command(name = "type")]
    Type(interactive::TypeArgs),

    /// Dispatch text from arguments, a file, or piped input
    Say(say::SayArgs),

    /// Count words and sentences
    Stats(stats::StatsArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the command, returning the process exit code
    pub fn execute(&self, config: &CliConfig) -> Result<u8> {
        match self {
            Commands::Type(args) => args.execute(config),
            Commands::Say(args) => args.execute().map(|()| 0),
            Commands::Stats(args) => args.execute().map(|()| 0),
            Commands::GenerateConfig(args) => args.execute().map(|()| 0),
        }
    }
}

/// Open the destination for finished text: a file, or stdout
pub(crate) fn open_output(path: Option<&Path>, append: bool) -> Result<Box<dyn Write + Send>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout()));
    };

    let file: File = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;
    Ok(Box::new(file))
}
