//! Downstream consumers of finished text
//!
//! Speech synthesis lives outside this crate; these consumers write the text
//! where such a backend (or a person) can pick it up.

use anyhow::Result;
use typespeak_core::Statistics;

/// Trait for receivers of finished paragraphs
pub trait TextConsumer: Send {
    /// Handle one finished paragraph
    fn consume(&mut self, text: &str) -> Result<()>;

    /// Finalize output (e.g., flush the writer)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonLinesWriter;
pub use text::TextWriter;

/// Consumer that only records paragraphs in the log
#[derive(Debug, Default)]
pub struct LogConsumer {
    total: Statistics,
}

impl LogConsumer {
    /// Create a log-only consumer
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of everything consumed so far
    pub fn total(&self) -> Statistics {
        self.total
    }
}

impl TextConsumer for LogConsumer {
    fn consume(&mut self, text: &str) -> Result<()> {
        let stats = Statistics::count(text);
        self.total += stats;
        log::info!("-> {text:?} ({stats})");
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::info!("session total: {}", self.total);
        Ok(())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one paragraph per line
    #[default]
    Text,
    /// One JSON object per paragraph, with statistics
    Json,
}

/// Build a consumer writing `format` to `writer`
pub fn consumer_for<W>(format: OutputFormat, writer: W) -> Box<dyn TextConsumer>
where
    W: std::io::Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonLinesWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_consumer_tallies() {
        let mut consumer = LogConsumer::new();
        consumer.consume("Hello world.").unwrap();
        consumer.consume("Wait, really? Yes!").unwrap();
        consumer.finish().unwrap();
        assert_eq!(
            consumer.total(),
            Statistics {
                words: 5,
                sentences: 3
            }
        );
    }

    #[test]
    fn test_consumer_for_format() {
        let mut consumer = consumer_for(OutputFormat::Text, Vec::new());
        assert!(consumer.consume("Hi.").is_ok());
        assert!(consumer.finish().is_ok());
    }
}
