//! Background clipboard writer.
//!
//! The worker thread owns the sink for its whole lifetime, so on platforms
//! where the clipboard is served by the owning process the copied text stays
//! available while the form is open. Requests and outcomes travel over
//! channels; the UI never blocks on a write.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use zeroize::Zeroize;

use super::ClipboardSink;
use crate::error::ClipboardError;

/// How long dropping the worker waits for a write in flight.
const JOIN_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

pub struct ClipboardWorker {
    requests: Option<Sender<String>>,
    outcomes: Receiver<CopyOutcome>,
    handle: Option<JoinHandle<()>>,
    gone_reported: bool,
}

impl ClipboardWorker {
    /// Start the worker. `make` runs on the worker thread, so the sink itself
    /// does not need to be `Send`.
    pub fn spawn<F, C>(make: F) -> Self
    where
        F: FnOnce() -> Result<C, ClipboardError> + Send + 'static,
        C: ClipboardSink,
    {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (out_tx, out_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut sink = match make() {
                Ok(sink) => Ok(sink),
                Err(e) => {
                    tracing::warn!("{e}");
                    Err(match e {
                        ClipboardError::Unavailable(reason) => reason,
                        other => other.to_string(),
                    })
                }
            };

            for mut text in req_rx {
                let outcome = match sink.as_mut() {
                    Ok(sink) => match sink.set_text(&text) {
                        Ok(()) => CopyOutcome::Copied,
                        Err(e) => CopyOutcome::Failed(e),
                    },
                    Err(reason) => CopyOutcome::Failed(ClipboardError::Unavailable(reason.clone())),
                };
                text.zeroize();
                if out_tx.send(outcome).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(req_tx),
            outcomes: out_rx,
            handle: Some(handle),
            gone_reported: false,
        }
    }

    /// Queue `text` for the clipboard. Returns immediately.
    pub fn request(&self, text: &str) -> Result<(), ClipboardError> {
        let tx = self.requests.as_ref().ok_or(ClipboardError::WorkerGone)?;
        tx.send(text.to_owned())
            .map_err(|mpsc::SendError(mut text)| {
                text.zeroize();
                ClipboardError::WorkerGone
            })
    }

    /// Next finished write, if any. A dead worker is reported once, then
    /// this keeps returning `None`.
    pub fn try_outcome(&mut self) -> Option<CopyOutcome> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) if self.gone_reported => None,
            Err(TryRecvError::Disconnected) => {
                self.gone_reported = true;
                Some(CopyOutcome::Failed(ClipboardError::WorkerGone))
            }
        }
    }
}

/// Waits up to `JOIN_GRACE` for the last write, then detaches a stalled
/// backend instead of blocking the caller.
impl Drop for ClipboardWorker {
    fn drop(&mut self) {
        drop(self.requests.take());
        let Some(handle) = self.handle.take() else {
            return;
        };
        let deadline = Instant::now() + JOIN_GRACE;
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        if handle.is_finished() {
            let _ = handle.join();
        } else {
            tracing::warn!("clipboard write still pending, not waiting for it");
        }
    }
}
