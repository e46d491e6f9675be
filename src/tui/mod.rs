//! Interactive password form.

mod form;
mod render;
mod text;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use zeroize::Zeroize;

use crate::clipboard::{ClipboardWorker, CopyOutcome, SystemClipboard};
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::ScreenGuard;

use form::{Action, FormState};

/// How often the loop wakes up to check timers and clipboard replies.
const TICK: Duration = Duration::from_millis(50);

fn draw(state: &FormState) -> io::Result<()> {
    let mut out = io::stdout().lock();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    out.write_all(render::frame(state).as_bytes())?;
    out.flush()
}

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let mut state = FormState::new(settings);
    let mut clipboard = ClipboardWorker::spawn(SystemClipboard::new);
    let mut rng = rand::rng();

    let mut screen = ScreenGuard::new()?;
    tracing::debug!("form started");

    let mut dirty = true;
    loop {
        let now = Instant::now();
        if state.tick(now) {
            dirty = true;
        }
        while let Some(outcome) = clipboard.try_outcome() {
            state.on_copy_outcome(outcome, now);
            dirty = true;
        }

        if dirty {
            draw(&state)?;
            dirty = false;
        }

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match state.handle_key(key) {
                Action::None => {}
                Action::Redraw => dirty = true,
                Action::Generate => {
                    state.submit(&mut rng);
                    dirty = true;
                }
                Action::Copy => {
                    if let Some(mut text) = state.copy_text() {
                        if let Err(e) = clipboard.request(&text) {
                            state.on_copy_outcome(CopyOutcome::Failed(e), Instant::now());
                            dirty = true;
                        }
                        text.zeroize();
                    }
                }
                Action::Quit => break,
            },
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }

    screen.restore();
    tracing::debug!("form closed");
    Ok(())
}
