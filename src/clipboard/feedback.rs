use std::time::{Duration, Instant};

pub const COPY_LABEL: &str = "Copiar al Portapapeles";
pub const COPIED_LABEL: &str = "Contraseña Copiada!";

/// Transient "copied" acknowledgment on the copy button.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    copied_until: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied_until: None,
        }
    }

    /// A copy succeeded at `now`. Restarts the timer if already showing.
    pub fn copied(&mut self, now: Instant) {
        self.copied_until = Some(now + self.duration);
    }

    /// Revert once the deadline has passed. Returns true if the label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copied_until {
            Some(until) if now >= until => {
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
