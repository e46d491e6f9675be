//! Full-screen RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;

/// Raw mode + alternate screen + hidden cursor, undone on drop.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        crate::exits::set_screen_active(true);
        Ok(Self { active: true })
    }

    /// Restore the terminal now (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            crate::exits::set_screen_active(false);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
