//! Interactive typing command

use crate::commands::open_output;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{consumer_for, LogConsumer, OutputFormat, TextConsumer};
use crate::session::{RawModeGuard, Session};
use anyhow::Result;
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use typespeak_core::{Screen, SegmenterConfig};

/// Arguments for the type command
#[derive(Debug, Default, Args)]
pub struct TypeArgs {
    /// Append finished paragraphs to this file (default: log only)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format for the output file
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet period after punctuation before a sentence is dispatched (ms)
    #[arg(short, long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Dispatch the unfinished sentence when input ends
    #[arg(long)]
    pub flush_on_eof: bool,
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self, config: &CliConfig) -> Result<u8> {
        if !io::stdin().is_terminal() {
            return Err(CliError::NotATerminal.into());
        }

        let engine_config = self.engine_config(config)?;
        log::info!(
            "typing session: debounce={:?} flush_on_eof={}",
            engine_config.debounce,
            engine_config.flush_on_eof
        );

        let mut consumer: Box<dyn TextConsumer> = match &self.output {
            Some(path) => consumer_for(self.format, open_output(Some(path.as_path()), true)?),
            None => Box::new(LogConsumer::new()),
        };

        let mut screen = Screen::new(io::stdout());
        screen.erase_line()?;

        let end = {
            let _raw = RawModeGuard::enable()?;
            Session::new(screen, engine_config).run(io::stdin(), consumer.as_mut())?
        };

        log::info!("session ended: {end:?}");
        Ok(end.exit_code())
    }

    /// Engine configuration: the file's values with command-line overrides
    fn engine_config(&self, config: &CliConfig) -> Result<SegmenterConfig> {
        let base = config.segmenter_config()?;
        SegmenterConfig::builder()
            .debounce_ms(
                self.debounce_ms
                    .unwrap_or(base.debounce.as_millis() as u64),
            )
            .flush_on_eof(self.flush_on_eof || base.flush_on_eof)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
