//! Clipboard access: system sink, background worker, button feedback.

mod feedback;
mod sink;
mod worker;

pub use feedback::{COPIED_LABEL, CopyFeedback};
#[cfg(test)]
pub use feedback::COPY_LABEL;
pub use sink::{ClipboardSink, SystemClipboard};
pub use worker::{ClipboardWorker, CopyOutcome};
