//! Plain text output

use super::TextConsumer;
use anyhow::Result;
use std::io::Write;

/// Plain text writer - outputs one paragraph per line
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> TextConsumer for TextWriter<W> {
    fn consume(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_paragraph_per_line() {
        let mut writer = TextWriter::new(Vec::new());
        writer.consume("Hello. World.").unwrap();
        writer.consume("  Second paragraph!  ").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "Hello. World.\nSecond paragraph!\n"
        );
    }

    #[test]
    fn test_blank_paragraph_skipped() {
        let mut writer = TextWriter::new(Vec::new());
        writer.consume("").unwrap();
        writer.consume("   ").unwrap();
        assert!(writer.into_inner().is_empty());
    }
}
