//! Terminal output utilities.
//!
//! Box drawing into a frame buffer, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREY: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn is_tty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Full-screen frame assembled in memory and written in one go.
/// Lines end in `\r\n` so the frame renders the same in raw mode.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push_str("\r\n");
    }

    pub fn blank(&mut self) {
        self.push_line("");
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn box_top(&mut self, title: &str) {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        self.push_line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }

    /// │ content                           │
    pub fn box_line(&mut self, content: &str) {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.push_line(&format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// │          content          │
    pub fn box_line_center(&mut self, content: &str) {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.push_line(&format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// Long plain text split across as many box lines as needed.
    pub fn box_wrapped(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            self.box_line("");
            return;
        }
        for chunk in chars.chunks(INNER_WIDTH) {
            let line: String = chunk.iter().collect();
            self.box_line(&line);
        }
    }

    pub fn box_rule(&mut self) {
        self.push_line(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    pub fn box_bottom(&mut self) {
        self.push_line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("Contraseña Copiada!"), 19);
    }

    #[test]
    fn box_lines_have_fixed_width() {
        let mut c = Canvas::new();
        c.box_top("Password");
        c.box_line(&format!("{BOLD}hi{RESET}"));
        c.box_line_center("mid");
        c.box_bottom();
        for line in c.into_string().split("\r\n").filter(|l| !l.is_empty()) {
            assert_eq!(console_width(line), BOX_WIDTH, "bad line: {line:?}");
        }
    }

    #[test]
    fn wrapped_text_splits_into_inner_width_chunks() {
        let mut c = Canvas::new();
        c.box_wrapped(&"x".repeat(INNER_WIDTH * 2 + 1));
        assert_eq!(c.into_string().matches("\r\n").count(), 3);
    }
}
