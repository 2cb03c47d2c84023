//! Stats command implementation

use crate::input::TextArgs;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use typespeak_core::Statistics;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        let text = self.text.read(io::stdin())?;
        let stats = Statistics::count(&text);
        log::debug!("stats for {} bytes: {stats}", text.len());

        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(render(&stats, self.format)?.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Render statistics in the requested format, newline-terminated
pub fn render(stats: &Statistics, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Text => stats.to_string(),
        OutputFormat::Json => {
            serde_json::to_string(stats).context("Failed to serialize statistics")?
        }
    };
    rendered.push('\n');
    Ok(rendered)
}
