//! Out-of-band control signals from the engine to its controller

use crate::classify::CR;
use std::fmt;
use std::sync::mpsc::{self, Receiver, SyncSender};

/// Why the engine stopped or what boundary it found
///
/// Signals are metadata about the text stream, never part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSignal {
    /// Ctrl-C: graceful shutdown request
    Cancel,
    /// The input ended or failed
    EndOfInput,
    /// The echo sink failed
    WriteError,
    /// Enter was pressed; the controller should flush the paragraph
    Flush,
    /// A sentence was queued; carries the punctuation that confirmed it
    Boundary(u8),
}

impl ControlSignal {
    /// Decode a signal byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => ControlSignal::Cancel,
            1 => ControlSignal::EndOfInput,
            2 => ControlSignal::WriteError,
            CR => ControlSignal::Flush,
            other => ControlSignal::Boundary(other),
        }
    }

    /// Encode as the signal byte
    pub fn as_byte(self) -> u8 {
        match self {
            ControlSignal::Cancel => 0,
            ControlSignal::EndOfInput => 1,
            ControlSignal::WriteError => 2,
            ControlSignal::Flush => CR,
            ControlSignal::Boundary(byte) => byte,
        }
    }

    /// Whether the engine has stopped after sending this signal
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ControlSignal::Cancel | ControlSignal::EndOfInput | ControlSignal::WriteError
        )
    }
}

impl From<u8> for ControlSignal {
    fn from(byte: u8) -> Self {
        ControlSignal::from_byte(byte)
    }
}

impl fmt::Display for ControlSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = self.as_byte();
        if byte.is_ascii_graphic() {
            write!(f, "'{}' [{}]", byte as char, byte)
        } else {
            write!(f, "[{byte}]")
        }
    }
}

/// Sending half of the control-signal channel
pub type SignalSender = SyncSender<ControlSignal>;

/// Receiving half of the control-signal channel
pub type SignalReceiver = Receiver<ControlSignal>;

/// Create a rendezvous control-signal channel
///
/// Every send blocks until the controller receives it, so no boundary is
/// dropped while the controller is busy.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    mpsc::sync_channel(0)
}
