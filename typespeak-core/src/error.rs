//! Error types for the segmentation engine

use std::io;
use thiserror::Error;

/// Errors that terminate the segmentation loop
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The input source failed
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// The echo sink failed
    #[error("failed to write echo: {0}")]
    Write(#[source] io::Error),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SegmentError {
    /// Control signal byte reported for this error
    pub fn signal_code(&self) -> u8 {
        match self {
            SegmentError::Read(_) | SegmentError::Config(_) => 1,
            SegmentError::Write(_) => 2,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SegmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SegmentError::Read(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.to_string(), "failed to read input: gone");

        let err = SegmentError::Config("debounce must be greater than 0".into());
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_signal_codes() {
        let read = SegmentError::Read(io::Error::other("x"));
        let write = SegmentError::Write(io::Error::other("x"));
        assert_eq!(read.signal_code(), 1);
        assert_eq!(write.signal_code(), 2);
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = SegmentError::Write(io::Error::new(io::ErrorKind::WriteZero, "closed"));
        let source = err.source().expect("write error keeps its source");
        assert_eq!(source.to_string(), "closed");
    }
}
