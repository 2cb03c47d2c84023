//! Terminal control for the live typing display
//!
//! The wrapped sink must accept in-band ANSI escape sequences
//! (stdout, stderr, a pty, ...).

use std::io::{self, Write};

/// `ESC [ 2 K`: erase the whole current line
pub const ERASE_LINE: [u8; 4] = [27, b'[', b'2', b'K'];

/// `ESC 7`: save the cursor position
pub const SAVE_CURSOR: [u8; 2] = [27, b'7'];

/// `ESC 8 ESC [ 0 J`: restore the saved cursor and clear below it
pub const CLEAR_TO_ANCHOR: [u8; 6] = [27, b'8', 27, b'[', b'0', b'J'];

/// Output sink with the control sequences used by the typing display
#[derive(Debug)]
pub struct Screen<W: Write> {
    inner: W,
}

impl<W: Write> Screen<W> {
    /// Wrap an output sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Clear the current line.
    ///
    /// Called at startup to get rid of whatever a shell prompt or a
    /// multiplexer left behind.
    pub fn erase_line(&mut self) -> io::Result<()> {
        self.send(&ERASE_LINE)
    }

    /// Anchor the cursor at its current position for a later [`Screen::reset`]
    pub fn save_cursor(&mut self) -> io::Result<()> {
        self.send(&SAVE_CURSOR)
    }

    /// Erase everything typed after the anchor.
    ///
    /// Content written before [`Screen::save_cursor`] is left alone.
    pub fn reset(&mut self) -> io::Result<()> {
        self.send(&CLEAR_TO_ANCHOR)
    }

    /// Unwrap the sink
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn send(&mut self, sequence: &[u8]) -> io::Result<()> {
        self.inner.write_all(sequence)?;
        self.inner.flush()
    }
}

impl<W: Write> Write for Screen<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
