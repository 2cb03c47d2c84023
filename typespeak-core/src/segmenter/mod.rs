//! Sentence segmentation state machine for live keystrokes
//!
//! The [`Segmenter`] reads raw bytes, echoes them (capitalizing sentence
//! starts, swallowing cursor keys), and queues sentences as their boundaries
//! are confirmed. A boundary is confirmed either by whitespace right after
//! the punctuation or by a debounce delay with no further input.
//!
//! Sentences live in a shared buffer so that a controller on another thread
//! can flush the paragraph through a [`ParagraphHandle`] while typing goes on.

pub mod buffer;
pub mod input;
mod state;
mod timer;

pub use buffer::SentenceBuffer;
pub use input::{InputUnit, InputWindow};

use crate::classify::{is_comma, is_punctuation, is_whitespace, CR, CTRL_C, ESC};
use crate::config::SegmenterConfig;
use crate::error::{Result, SegmentError};
use crate::screen::CLEAR_TO_ANCHOR;
use crate::signal::{ControlSignal, SignalSender};
use crate::stats::Statistics;
use log::{debug, info, trace};
use state::{lock, SegmentState, Shared};
use std::io::{Read, Write};

/// Streaming sentence segmenter
pub struct Segmenter<R: Read> {
    input: InputWindow<R>,
    signals: SignalSender,
    config: SegmenterConfig,
    shared: Shared,
    /// Upper-case the next letter
    capitalize: bool,
    /// Previous byte that reached classification
    prev: u8,
}

impl<R: Read> std::fmt::Debug for Segmenter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .field("capitalize", &self.capitalize)
            .field("prev", &self.prev)
            .finish_non_exhaustive()
    }
}

/// What the loop does after an input unit
enum Step {
    Continue,
    Stop,
}

impl<R: Read> Segmenter<R> {
    /// Create a segmenter reading from `input` and reporting on `signals`
    pub fn new(input: R, signals: SignalSender, config: SegmenterConfig) -> Self {
        Self {
            input: InputWindow::new(input),
            signals,
            config,
            shared: SegmentState::new_shared(),
            capitalize: true,
            prev: 0,
        }
    }

    /// Get a handle for reading and flushing the paragraph from another thread
    pub fn handle(&self) -> ParagraphHandle {
        ParagraphHandle {
            shared: Shared::clone(&self.shared),
        }
    }

    /// Echo the input to `out` until it ends, fails, or Ctrl-C is read.
    ///
    /// Blocks the calling thread. Every way out sends exactly one terminal
    /// [`ControlSignal`] first: `Cancel` for Ctrl-C, `EndOfInput` for end of
    /// input or a read error, `WriteError` when `out` fails. Returns the
    /// number of bytes echoed.
    pub fn copy_to<W: Write>(&mut self, out: &mut W) -> Result<u64> {
        let mut written = 0u64;
        info!("segmenter started");

        loop {
            let unit = match self.input.next_unit() {
                Ok(Some(unit)) => unit,
                Ok(None) => {
                    self.finish_input();
                    info!("input ended after {written} bytes");
                    return Ok(written);
                }
                Err(err) => {
                    self.finish_input();
                    return Err(SegmentError::Read(err));
                }
            };

            let byte = match unit {
                InputUnit::Arrow(len) => {
                    trace!("ignoring cursor key ({len} bytes)");
                    continue;
                }
                InputUnit::Byte(byte) => byte,
            };

            match self.step(byte, out, &mut written)? {
                Step::Continue => self.prev = byte,
                Step::Stop => return Ok(written),
            }
        }
    }

    /// Process one byte
    fn step<W: Write>(&mut self, byte: u8, out: &mut W, written: &mut u64) -> Result<Step> {
        let mut capitalized = [byte];
        let echo: &[u8] = match byte {
            CR | ESC => {
                trace!("^ [{byte}]");
                &CLEAR_TO_ANCHOR
            }
            CTRL_C => {
                lock(&self.shared).disarm();
                info!("cancelled by user");
                self.emit(ControlSignal::Cancel);
                return Ok(Step::Stop);
            }
            _ if is_punctuation(self.prev) && is_whitespace(byte) => {
                match self.confirm_boundary() {
                    None => return Ok(Step::Stop),
                    Some(true) => {}
                    Some(false) => {
                        // the sentence is still open: keep the word break
                        let mut state = lock(&self.shared);
                        if !state.running.is_empty() {
                            state.running.push(byte);
                        }
                    }
                }
                &capitalized
            }
            _ => {
                if self.capitalize && byte.is_ascii_alphabetic() {
                    capitalized[0] = byte.to_ascii_uppercase();
                    self.capitalize = false;
                }
                let mut state = lock(&self.shared);
                if !is_punctuation(byte) && state.disarm() {
                    trace!("punctuation followed by [{byte}], not a boundary");
                }
                state.running.push(capitalized[0]);
                &capitalized
            }
        };

        if let Err(err) = out.write_all(echo).and_then(|()| out.flush()) {
            lock(&self.shared).disarm();
            self.emit(ControlSignal::WriteError);
            return Err(SegmentError::Write(err));
        }
        *written += echo.len() as u64;

        if byte == CR {
            if !self.emit(ControlSignal::Flush) {
                return Ok(Step::Stop);
            }
        } else if is_punctuation(byte) && !is_whitespace(self.prev) && !is_punctuation(self.prev)
        {
            timer::arm(&self.shared, &self.signals, byte, self.config.debounce);
        }

        Ok(Step::Continue)
    }

    /// Whitespace after punctuation: settle the boundary now.
    ///
    /// Returns whether a sentence was queued, or `None` when the controller
    /// is gone.
    fn confirm_boundary(&mut self) -> Option<bool> {
        let punctuation = self.prev;
        let comma = is_comma(punctuation);
        if !comma {
            self.capitalize = true;
        }

        let queued = {
            let mut state = lock(&self.shared);
            // a timer that already fired has queued the sentence itself
            state.disarm() && !comma && state.queue_running()
        };

        if queued {
            debug!("<- {} @ whitespace", ControlSignal::Boundary(punctuation));
            if !self.emit(ControlSignal::Boundary(punctuation)) {
                return None;
            }
        }
        Some(queued)
    }

    /// End of input: settle the timer and report
    fn finish_input(&mut self) {
        {
            let mut state = lock(&self.shared);
            state.disarm();
            if self.config.flush_on_eof && state.queue_running() {
                debug!("queued partial sentence at end of input");
            }
        }
        self.emit(ControlSignal::EndOfInput);
    }

    /// Send a signal, returning false if the controller hung up
    fn emit(&self, signal: ControlSignal) -> bool {
        match self.signals.send(signal) {
            Ok(()) => true,
            Err(_) => {
                debug!("controller gone, dropping {signal}");
                false
            }
        }
    }
}

/// Thread-safe access to the paragraph being built by a [`Segmenter`]
#[derive(Debug, Clone)]
pub struct ParagraphHandle {
    shared: Shared,
}

impl ParagraphHandle {
    /// Current paragraph: the queued sentences joined with spaces
    pub fn paragraph(&self) -> String {
        lock(&self.shared).sentences.paragraph()
    }

    /// Take the paragraph and reset the buffer to one empty sentence.
    ///
    /// The paragraph's statistics are added to [`ParagraphHandle::stats`].
    pub fn flush_paragraph(&self) -> String {
        lock(&self.shared).flush_paragraph()
    }

    /// Snapshot of the queued sentences, in-progress slot last
    pub fn sentences(&self) -> Vec<String> {
        lock(&self.shared).sentences.sentences().to_vec()
    }

    /// Text typed since the last queued sentence
    pub fn in_progress(&self) -> String {
        String::from_utf8_lossy(&lock(&self.shared).running).into_owned()
    }

    /// Whether a debounce timer is waiting to fire
    pub fn has_pending_boundary(&self) -> bool {
        lock(&self.shared).pending.is_some()
    }

    /// Statistics of every paragraph flushed so far
    pub fn stats(&self) -> Statistics {
        lock(&self.shared).tally
    }

    /// Statistics of the paragraph as it stands, without flushing
    pub fn live_stats(&self) -> Statistics {
        Statistics::count(&self.paragraph())
    }
}
