//! typespeak CLI library
//!
//! This library provides the command-line interface for typespeak: an
//! interactive raw-terminal typing mode that dispatches each finished
//! sentence while you keep typing, plus one-shot commands for piped text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod session;

pub use error::{CliError, CliResult};

use clap::Parser;
use commands::say::SayArgs;
use commands::Commands;
use config::CliConfig;
use input::TextArgs;
use logging::LogSettings;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "typespeak",
    version,
    about = "Type in a raw terminal; finished sentences are dispatched while you keep typing"
)]
pub struct Cli {
    /// Command to run (default: `type` on a terminal, `say` for piped input)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to say when no command is given
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file (overrides the configuration file)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Run the selected command, returning the process exit code
    pub fn run(self) -> CliResult<u8> {
        let Cli {
            command,
            text,
            config: config_path,
            log_file,
            verbose,
            quiet,
        } = self;
        let config = CliConfig::load(config_path.as_deref())?;

        let log_file = log_file.unwrap_or_else(|| config.logging.file.clone());
        logging::init(&LogSettings::new(
            log_file,
            &config.logging.level,
            verbose,
            quiet,
        ))?;

        let command = command.unwrap_or_else(|| Commands::implicit(text));
        log::debug!("command: {command:?}");
        command.execute(&config)
    }
}

impl Commands {
    /// Command used when none is given: `say` for bare text or piped
    /// input, typing mode on a terminal
    pub fn implicit(text: Vec<String>) -> Self {
        if !text.is_empty() || !std::io::stdin().is_terminal() {
            Commands::Say(SayArgs {
                text: TextArgs { text, file: None },
                ..Default::default()
            })
        } else {
            Commands::Type(Default::default())
        }
    }
}
