//! State shared between the segmentation loop and its debounce timer

use super::buffer::SentenceBuffer;
use crate::stats::Statistics;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared, lock-protected engine state
pub(crate) type Shared = Arc<Mutex<SegmentState>>;

/// Lock the shared state
///
/// A panic while holding the lock leaves the buffers in a usable state, so
/// poisoning is ignored.
pub(crate) fn lock(shared: &Shared) -> MutexGuard<'_, SegmentState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An armed debounce timer
#[derive(Debug)]
pub(crate) struct PendingBoundary {
    /// Identifies the timer thread that owns this entry
    pub(crate) id: u64,
    /// Dropping the sender wakes the timer thread without firing
    _cancel: Sender<()>,
}

impl PendingBoundary {
    pub(crate) fn new(id: u64, cancel: Sender<()>) -> Self {
        Self {
            id,
            _cancel: cancel,
        }
    }
}

/// Everything the timer thread may touch
#[derive(Debug, Default)]
pub(crate) struct SegmentState {
    /// Finished sentences of the current paragraph
    pub(crate) sentences: SentenceBuffer,
    /// Bytes of the sentence being typed
    pub(crate) running: Vec<u8>,
    /// The outstanding debounce timer, if any
    pub(crate) pending: Option<PendingBoundary>,
    /// Last timer id handed out
    pub(crate) timer_seq: u64,
    /// Statistics of every flushed paragraph
    pub(crate) tally: Statistics,
}

impl SegmentState {
    pub(crate) fn new_shared() -> Shared {
        Arc::new(Mutex::new(SegmentState::default()))
    }

    /// Move the running sentence into the sentence buffer.
    ///
    /// Surrounding whitespace is dropped; a blank sentence is not queued.
    /// Returns whether anything was queued.
    pub(crate) fn queue_running(&mut self) -> bool {
        let raw = std::mem::take(&mut self.running);
        let text = String::from_utf8_lossy(&raw);
        let sentence = text.trim();
        if sentence.is_empty() {
            return false;
        }
        self.sentences.queue(sentence.to_string());
        true
    }

    /// Register a new pending timer, replacing (and cancelling) any old one
    pub(crate) fn arm(&mut self, cancel: Sender<()>) -> u64 {
        self.timer_seq += 1;
        self.pending = Some(PendingBoundary::new(self.timer_seq, cancel));
        self.timer_seq
    }

    /// Take the pending timer, cancelling it. Returns whether one was pending.
    pub(crate) fn disarm(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the pending timer only if it is still the one with `id`
    pub(crate) fn claim(&mut self, id: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Join the paragraph, reset the buffer and add it to the tally
    pub(crate) fn flush_paragraph(&mut self) -> String {
        let paragraph = self.sentences.take_paragraph();
        self.tally += Statistics::count(&paragraph);
        paragraph
    }
}
