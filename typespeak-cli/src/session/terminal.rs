//! Raw mode handling for the controlling terminal

use crate::error::CliError;
use anyhow::Result;
use crossterm::terminal;

/// Keeps the terminal in raw mode while alive
///
/// Cooked mode is restored on drop, so every exit path (including `?` and
/// panics that unwind) leaves a usable terminal behind.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal to raw mode
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| CliError::TerminalError(e.to_string()))?;
        log::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => log::debug!("raw mode disabled"),
            Err(err) => log::error!("failed to restore terminal: {err}"),
        }
    }
}
