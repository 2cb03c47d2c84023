//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Nothing to speak
    EmptyText,
    /// Interactive mode needs a terminal on stdin
    NotATerminal,
    /// Configuration error
    ConfigError(String),
    /// Raw mode could not be entered or left
    TerminalError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyText => write!(f, "can't speak <empty string>"),
            CliError::NotATerminal => write!(f, "interactive mode requires a terminal on stdin"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TerminalError(msg) => write!(f, "Terminal error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
