//! Interactive sentence segmentation for live-typed terminal input
//!
//! This crate turns a stream of raw keystrokes into finished sentences while
//! the user is still typing. Bytes are read one at a time from any
//! [`std::io::Read`] source, echoed (lightly transformed) to a
//! [`std::io::Write`] sink, and sentence boundaries are reported on a
//! rendezvous channel as [`ControlSignal`]s.
//!
//! # Architecture
//!
//! - [`classify`]: pure byte classification (whitespace, punctuation, arrow keys)
//! - [`screen`]: the three terminal control sequences used by the live display
//! - [`segmenter`]: the segmentation state machine and its debounce timer
//! - [`stats`]: word and sentence counting over finished text
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use std::thread;
//! use typespeak_core::{signal_channel, ControlSignal, Segmenter, SegmenterConfig};
//!
//! let (tx, rx) = signal_channel();
//! let mut segmenter = Segmenter::new(Cursor::new(b"Hello. World".to_vec()), tx, SegmenterConfig::default());
//! let handle = segmenter.handle();
//!
//! let worker = thread::spawn(move || {
//!     let mut echo = Vec::new();
//!     segmenter.copy_to(&mut echo).unwrap();
//!     echo
//! });
//!
//! assert_eq!(rx.recv().unwrap(), ControlSignal::Boundary(b'.'));
//! assert_eq!(rx.recv().unwrap(), ControlSignal::EndOfInput);
//! let echo = worker.join().unwrap();
//!
//! assert_eq!(echo, b"Hello. World");
//! assert_eq!(handle.flush_paragraph(), "Hello.");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod screen;
pub mod segmenter;
pub mod signal;
pub mod stats;

// Re-export key types
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use error::{Result, SegmentError};
pub use screen::Screen;
pub use segmenter::{ParagraphHandle, Segmenter};
pub use signal::{signal_channel, ControlSignal, SignalReceiver, SignalSender};
pub use stats::Statistics;
