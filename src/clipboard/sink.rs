use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Something that can receive text for the clipboard.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Some providers hand back a copy; don't leave it lying around.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
