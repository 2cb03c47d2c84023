//! Lookahead window over the raw input source

use crate::classify::{arrow_sequence_len, is_arrow_prefix};
use std::io::{self, Read};

/// Bytes requested per read; a terminal in raw mode returns one keystroke
/// (up to 6 bytes) per read, pasted text may fill the whole window.
const WINDOW_SIZE: usize = 64;

/// One unit of input as seen by the segmentation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputUnit {
    /// A single byte
    Byte(u8),
    /// A cursor key sequence of the given length, already consumed
    Arrow(usize),
}

/// Buffered reader that hands out bytes one at a time and recognizes
/// cursor key sequences
///
/// A short read is one keystroke, so a lone `ESC` there is the Escape key.
/// Only a read that filled the window may have cut a sequence in two; the
/// tail of such a read is completed from the next read.
#[derive(Debug)]
pub struct InputWindow<R: Read> {
    reader: R,
    window: [u8; WINDOW_SIZE],
    start: usize,
    end: usize,
    /// The last read filled the window
    full: bool,
}

impl<R: Read> InputWindow<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            window: [0; WINDOW_SIZE],
            start: 0,
            end: 0,
            full: false,
        }
    }

    /// Next input unit, `None` at end of input
    pub fn next_unit(&mut self) -> io::Result<Option<InputUnit>> {
        if self.start == self.end && !self.fill()? {
            return Ok(None);
        }

        if self.full && is_arrow_prefix(&self.window[self.start..self.end]) {
            self.top_up()?;
        }

        let available = &self.window[self.start..self.end];
        if let Some(len) = arrow_sequence_len(available) {
            self.start += len;
            return Ok(Some(InputUnit::Arrow(len)));
        }

        let byte = available[0];
        self.start += 1;
        Ok(Some(InputUnit::Byte(byte)))
    }

    /// Refill the window; false at end of input
    fn fill(&mut self) -> io::Result<bool> {
        let n = read_retrying(&mut self.reader, &mut self.window)?;
        self.start = 0;
        self.end = n;
        self.full = n == WINDOW_SIZE;
        Ok(n > 0)
    }

    /// Move the unread tail to the front and append the next read to it
    fn top_up(&mut self) -> io::Result<()> {
        self.window.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;

        let n = read_retrying(&mut self.reader, &mut self.window[self.end..])?;
        self.end += n;
        self.full = self.end == WINDOW_SIZE;
        Ok(())
    }
}

fn read_retrying(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}
