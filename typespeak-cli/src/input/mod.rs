//! Text sources for the one-shot commands

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where one-shot text comes from
#[derive(Debug, Default, Args)]
pub struct TextArgs {
    /// Text to process; words are joined with single spaces
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl TextArgs {
    /// Resolve the text: arguments first, then the file, then `stdin`
    pub fn read(&self, stdin: impl Read) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }

        if let Some(path) = &self.file {
            return read_file(path);
        }

        read_piped(stdin)
    }
}

/// Read a file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read piped input, dropping the newline that ends it
pub fn read_piped(mut input: impl Read) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    fn args(text: &[&str], file: Option<PathBuf>) -> TextArgs {
        TextArgs {
            text: text.iter().map(|s| s.to_string()).collect(),
            file,
        }
    }

    #[test]
    fn test_arguments_are_joined() {
        let text = args(&["Hello", "world."], None).read(io::empty()).unwrap();
        assert_eq!(text, "Hello world.");
    }

    #[test]
    fn test_piped_input_drops_final_newline() {
        let text = args(&[], None)
            .read(Cursor::new("Line one.\nLine two.\n"))
            .unwrap();
        assert_eq!(text, "Line one.\nLine two.");

        let text = read_piped(Cursor::new("crlf\r\n")).unwrap();
        assert_eq!(text, "crlf");

        let text = read_piped(Cursor::new("no newline")).unwrap();
        assert_eq!(text, "no newline");
    }

    #[test]
    fn test_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("speech.txt");
        fs::write(&file_path, "Hello 世界! From a file.").unwrap();

        let text = args(&[], Some(file_path)).read(io::empty()).unwrap();
        assert_eq!(text, "Hello 世界! From a file.");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8_on_stdin() {
        let result = read_piped(Cursor::new(vec![0xff, 0xfe]));
        assert!(result.is_err());
    }
}
