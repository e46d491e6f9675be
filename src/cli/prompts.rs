//! User-facing confirmations and prompts for CLI output.
//!
//! Diagnostics go through `tracing`; this is only what the user asked to see.

use std::io::Write;

use crate::clipboard::COPIED_LABEL;
use crate::pass::entropy;
use crate::terminal::{GREY, RESET, YELLOW, is_tty};

#[derive(Debug, Clone, Copy)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// True when we should not ask anything: quiet, or stdin is not a tty.
    pub fn skip_prompt(&self) -> bool {
        self.quiet || !is_tty(0)
    }

    /// Clipboard copy confirmation, suppressed in quiet mode.
    pub fn clipboard_copied(&self) {
        if !self.quiet {
            println!("*** {COPIED_LABEL} ***");
        }
    }

    /// Entropy line on stderr so stdout stays just passwords.
    pub fn entropy(&self, length: usize, pool_size: usize) {
        let bits = entropy::bits(length, pool_size);
        eprintln!(
            "{GREY}{:.1} bits ({}) • Charset: {} chars{RESET}",
            bits,
            entropy::strength(bits),
            pool_size
        );
    }

    /// Ask whether to print instead when the clipboard is unavailable.
    /// Non-interactive or quiet runs fall back without asking.
    pub fn clipboard_fallback(&self) -> bool {
        if self.skip_prompt() {
            return true;
        }

        eprint!("{YELLOW}Clipboard unavailable. Print to terminal instead? [Y/n]: {RESET}");
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}
