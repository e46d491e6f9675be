//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use rand::Rng;
use zeroize::Zeroize;

use super::{CliFlags, Prompts};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::error::Result;
use crate::pass::{self, Generated, charset};
use crate::settings::Settings;

/// How a CLI run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    NoClassSelected,
    ClipboardFailed,
    Aborted,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    prompts: Prompts,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl Context {
    pub fn new(flags: &CliFlags) -> Self {
        Self {
            settings: flags.settings(),
            prompts: Prompts::new(flags.quiet),
            clipboard: None,
        }
    }

    /// Use `sink` instead of the system clipboard.
    #[cfg(test)]
    pub fn with_clipboard(mut self, sink: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(sink);
        self
    }

    /// Run CLI generation against stdout.
    pub fn run(&mut self) -> Result<Status> {
        if self.settings.to_clipboard && !self.open_clipboard() {
            return Ok(Status::Aborted);
        }
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut rng = rand::rng();
        self.generate_output(&mut out, &mut rng)
    }

    /// Returns false if the user chose to abort.
    fn open_clipboard(&mut self) -> bool {
        if self.clipboard.is_some() {
            return true;
        }
        match SystemClipboard::new() {
            Ok(c) => {
                self.clipboard = Some(Box::new(c));
                true
            }
            Err(e) => {
                tracing::warn!("{e}");
                if self.prompts.clipboard_fallback() {
                    self.settings.to_clipboard = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Generate passwords and hand them to the clipboard or `out`.
    /// Printed passwords are written one at a time as they are generated.
    pub fn generate_output<W: Write, R: Rng + ?Sized>(
        &mut self,
        out: &mut W,
        rng: &mut R,
    ) -> Result<Status> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords.max(1);

        let Some(passwords) = pass::generate_batch(request, count, rng) else {
            tracing::warn!("all character classes disabled");
            writeln!(out, "{}", Generated::NoClassSelected)?;
            return Ok(Status::NoClassSelected);
        };

        if self.settings.show_entropy {
            self.prompts
                .entropy(request.length, charset::size(request.classes));
        }

        match self.clipboard.as_mut() {
            Some(sink) if self.settings.to_clipboard => {
                // Sized up front: a reallocation would leave an unzeroed copy.
                let size = count.checked_mul(request.length + 1).unwrap_or(0);
                let mut joined = String::with_capacity(size);
                for (i, p) in passwords.enumerate() {
                    if i > 0 {
                        joined.push('\n');
                    }
                    joined.push_str(p.as_str());
                }
                let result = sink.set_text(&joined);
                joined.zeroize();
                match result {
                    Ok(()) => {
                        self.prompts.clipboard_copied();
                        Ok(Status::Done)
                    }
                    Err(e) => {
                        tracing::error!("error copying password: {e}");
                        Ok(Status::ClipboardFailed)
                    }
                }
            }
            _ => {
                for p in passwords {
                    writeln!(out, "{p}")?;
                }
                out.flush()?;
                Ok(Status::Done)
            }
        }
    }
}
