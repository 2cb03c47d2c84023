//! Interactive typing session
//!
//! Wires the segmentation engine to the terminal: the engine runs on its own
//! thread echoing to the screen, a controller thread turns boundary signals
//! into finished paragraphs, and the caller's thread hands each paragraph to
//! a [`TextConsumer`].

pub mod terminal;

pub use terminal::RawModeGuard;

use crate::output::TextConsumer;
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use typespeak_core::{
    signal_channel, ControlSignal, ParagraphHandle, Screen, Segmenter, SegmenterConfig,
    SignalReceiver,
};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user pressed Ctrl-C
    Cancelled,
    /// The input closed or failed
    InputClosed,
    /// The screen could not be written
    WriteFailed,
}

impl SessionEnd {
    fn from_signal(signal: ControlSignal) -> Self {
        match signal {
            ControlSignal::Cancel => SessionEnd::Cancelled,
            ControlSignal::WriteError => SessionEnd::WriteFailed,
            _ => SessionEnd::InputClosed,
        }
    }

    /// Process exit code: the byte of the terminating signal
    pub fn exit_code(self) -> u8 {
        match self {
            SessionEnd::Cancelled => ControlSignal::Cancel.as_byte(),
            SessionEnd::InputClosed => ControlSignal::EndOfInput.as_byte(),
            SessionEnd::WriteFailed => ControlSignal::WriteError.as_byte(),
        }
    }
}

/// One interactive session over a screen
pub struct Session<W: Write + Send + 'static> {
    screen: Screen<W>,
    config: SegmenterConfig,
}

impl<W: Write + Send + 'static> Session<W> {
    /// Create a session drawing on `screen`
    pub fn new(screen: Screen<W>, config: SegmenterConfig) -> Self {
        Self { screen, config }
    }

    /// Run until the engine stops, feeding paragraphs to `consumer`.
    ///
    /// The terminal must already be in raw mode. The screen is reset to the
    /// saved anchor before returning so no half-typed text is left behind.
    ///
    /// If the consumer fails the session is abandoned without waiting for
    /// the engine, which may be blocked on input. The screen is closed
    /// first, so the engine stops at its next echo.
    pub fn run<R>(self, input: R, consumer: &mut dyn TextConsumer) -> Result<SessionEnd>
    where
        R: Read + Send + 'static,
    {
        let Session { mut screen, config } = self;
        screen.save_cursor()?;
        info!("<~ START ~>");

        let shared = Arc::new(Mutex::new(SharedScreen {
            screen,
            closed: false,
        }));
        let mut echo = Echo(Arc::clone(&shared));

        let (signal_tx, signal_rx) = signal_channel();
        let mut segmenter = Segmenter::new(input, signal_tx, config);
        let controller = Controller::new(segmenter.handle(), signal_rx);

        let engine = thread::Builder::new()
            .name("typespeak-engine".into())
            .spawn(move || segmenter.copy_to(&mut echo))?;

        let (text_tx, text_rx) = mpsc::sync_channel(0);
        let control = thread::Builder::new()
            .name("typespeak-controller".into())
            .spawn(move || controller.run(text_tx))?;

        let consumed = consume(&text_rx, consumer);
        drop(text_rx);

        let end = match consumed {
            Ok(()) => join(control, engine),
            Err(err) => {
                warn!("consumer failed, abandoning session: {err:#}");
                Err(err)
            }
        };

        if let Err(err) = lock_screen(&shared).close() {
            warn!("could not reset screen: {err}");
        }

        let end = end?;
        info!("~> CLOSE <~ ({end:?})");
        Ok(end)
    }
}

/// Wait for both session threads
fn join(
    control: JoinHandle<SessionEnd>,
    engine: JoinHandle<typespeak_core::Result<u64>>,
) -> Result<SessionEnd> {
    let end = control
        .join()
        .map_err(|_| anyhow!("controller thread panicked"))?;
    let result = engine
        .join()
        .map_err(|_| anyhow!("engine thread panicked"))?;

    if let Err(err) = result {
        warn!("engine stopped: {err}");
    }
    Ok(end)
}

/// Screen shared by the engine thread and the session
struct SharedScreen<W: Write> {
    screen: Screen<W>,
    closed: bool,
}

impl<W: Write> SharedScreen<W> {
    /// Reset to the anchor and refuse any further echo
    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.screen.reset()
    }
}

fn lock_screen<W: Write>(shared: &Mutex<SharedScreen<W>>) -> MutexGuard<'_, SharedScreen<W>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The engine's view of the shared screen
struct Echo<W: Write>(Arc<Mutex<SharedScreen<W>>>);

impl<W: Write> Write for Echo<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut shared = lock_screen(&self.0);
        if shared.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "session closed"));
        }
        shared.screen.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut shared = lock_screen(&self.0);
        if shared.closed {
            return Ok(());
        }
        shared.screen.flush()
    }
}

/// Hand every finished paragraph to the consumer until the terminal marker
fn consume(text_rx: &Receiver<Option<String>>, consumer: &mut dyn TextConsumer) -> Result<()> {
    while let Ok(Some(text)) = text_rx.recv() {
        consumer.consume(&text)?;
    }
    consumer.finish()
}

/// Turns control signals into finished paragraphs
struct Controller {
    handle: ParagraphHandle,
    signals: SignalReceiver,
}

impl Controller {
    fn new(handle: ParagraphHandle, signals: SignalReceiver) -> Self {
        Self { handle, signals }
    }

    fn run(self, text: SyncSender<Option<String>>) -> SessionEnd {
        loop {
            let signal = self.signals.recv().unwrap_or(ControlSignal::EndOfInput);

            if signal.is_terminal() {
                // sentences queued before the input closed still go out
                if signal == ControlSignal::EndOfInput {
                    self.dispatch(&text);
                }
                let _ = text.send(None);
                return SessionEnd::from_signal(signal);
            }

            debug!("-> {signal}");
            if !self.dispatch(&text) {
                return SessionEnd::InputClosed;
            }
        }
    }

    /// Flush the paragraph downstream; false when the consumer is gone
    fn dispatch(&self, text: &SyncSender<Option<String>>) -> bool {
        debug!("sentences: {:?}", self.handle.sentences());
        let paragraph = self.handle.flush_paragraph();
        if paragraph.is_empty() {
            return true;
        }
        text.send(Some(paragraph)).is_ok()
    }
}
