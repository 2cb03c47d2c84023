//! Say command implementation

use crate::commands::open_output;
use crate::error::CliError;
use crate::input::TextArgs;
use crate::output::{consumer_for, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;
use typespeak_core::Statistics;

/// Arguments for the say command
#[derive(Debug, Default, Args)]
pub struct SayArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SayArgs {
    /// Execute the say command
    pub fn execute(&self) -> Result<()> {
        let text = self.text.read(io::stdin())?;
        if text.trim().is_empty() {
            return Err(CliError::EmptyText.into());
        }

        let stats = Statistics::count(&text);
        log::info!("-> {text:?} ({stats})");

        let mut consumer = consumer_for(self.format, open_output(self.output.as_deref(), false)?);
        consumer.consume(&text)?;
        consumer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn say(text: &[&str], output: Option<PathBuf>, format: OutputFormat) -> SayArgs {
        SayArgs {
            text: TextArgs {
                text: text.iter().map(|s| s.to_string()).collect(),
                file: None,
            },
            output,
            format,
        }
    }

    #[test]
    fn test_say_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("said.txt");

        say(&["Hello", "there."], Some(path.clone()), OutputFormat::Text)
            .execute()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello there.\n");
    }

    #[test]
    fn test_say_json_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("said.jsonl");

        say(&["Wait, really? Yes!"], Some(path.clone()), OutputFormat::Json)
            .execute()
            .unwrap();

        let line = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["text"], "Wait, really? Yes!");
        assert_eq!(value["words"], 3);
        assert_eq!(value["sentences"], 2);
    }

    #[test]
    fn test_say_blank_text_rejected() {
        let err = say(&["   "], None, OutputFormat::Text)
            .execute()
            .unwrap_err();
        assert_eq!(err.to_string(), "can't speak <empty string>");
    }
}
