//! Debounce timer for sentence punctuation

use super::state::{lock, Shared};
use crate::signal::{ControlSignal, SignalSender};
use log::{debug, warn};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Arm the debounce timer for `punctuation`.
///
/// Any previous timer is cancelled. When `delay` passes without the timer
/// being disarmed, the running sentence is queued and a boundary signal
/// carrying `punctuation` is sent.
pub(crate) fn arm(shared: &Shared, signals: &SignalSender, punctuation: u8, delay: Duration) {
    let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
    let id = lock(shared).arm(cancel_tx);

    let shared_state = Shared::clone(shared);
    let signals = signals.clone();
    let spawned = thread::Builder::new()
        .name("typespeak-debounce".into())
        .spawn(move || {
            // any wake-up other than the timeout means the entry was dropped
            if cancel_rx.recv_timeout(delay) != Err(RecvTimeoutError::Timeout) {
                return;
            }

            let queued = {
                let mut state = lock(&shared_state);
                if !state.claim(id) {
                    return;
                }
                state.queue_running()
            };

            let signal = ControlSignal::Boundary(punctuation);
            debug!("<- {signal} (debounce, queued={queued})");
            if signals.send(signal).is_err() {
                debug!("controller gone, dropping {signal}");
            }
        });

    if let Err(err) = spawned {
        warn!("could not start debounce timer: {err}");
        lock(shared).claim(id);
    }
}
