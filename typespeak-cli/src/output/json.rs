//! JSON lines output

use super::TextConsumer;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use typespeak_core::Statistics;

/// JSON lines writer - one object per paragraph
pub struct JsonLinesWriter<W: Write> {
    writer: W,
    index: usize,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ParagraphData {
    /// Position of the paragraph in the session, starting at 0
    pub index: usize,
    /// The paragraph text
    pub text: String,
    /// Word and sentence counts
    #[serde(flatten)]
    pub stats: Statistics,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a new JSON lines writer
    pub fn new(writer: W) -> Self {
        Self { writer, index: 0 }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> TextConsumer for JsonLinesWriter<W> {
    fn consume(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let data = ParagraphData {
            index: self.index,
            text: text.to_string(),
            stats: Statistics::count(text),
        };
        serde_json::to_writer(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.index += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
