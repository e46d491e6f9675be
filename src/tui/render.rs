use crate::pass::{CharacterClass, entropy};
use crate::terminal::{BOLD, Canvas, GREEN, GREY, RED, RESET, REVERSE, UNDERLINE};

use super::form::{Field, FormState};
use super::text::KEY_HINTS;

const SLIDER_WIDTH: usize = 40;

fn focus(text: &str, focused: bool) -> String {
    if focused {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn slider(state: &FormState) -> String {
    let (min, max) = state.bounds();
    let span = max.saturating_sub(min).max(1);
    let filled = (state.length() - min) * SLIDER_WIDTH / span;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SLIDER_WIDTH - filled)
    )
}

/// Draw the whole form into a frame.
pub fn frame(state: &FormState) -> String {
    let mut c = Canvas::new();
    let focused = state.focused();

    c.box_top("Password Generator");
    c.box_line(&format!(
        "{} {} {:>3}",
        focus("Length", focused == Field::Length),
        slider(state),
        state.length()
    ));
    c.box_rule();

    for class in CharacterClass::ALL {
        let mark = if state.classes().contains(class) { "[x]" } else { "[ ]" };
        let label = format!("{mark} {}", class.label());
        c.box_line(&focus(&label, focused == Field::Class(class)));
    }
    c.box_rule();

    let copy = state.copy_label();
    let copy = if copy == crate::clipboard::COPIED_LABEL {
        format!("{GREEN}[ {copy} ]{RESET}")
    } else {
        format!("[ {copy} ]")
    };
    c.box_line_center(&format!(
        "{}    {}",
        focus("[ Generate ]", focused == Field::Generate),
        if focused == Field::Copy {
            format!("{REVERSE}{copy}{RESET}")
        } else {
            copy
        }
    ));
    c.box_bottom();
    c.blank();

    c.box_top("Password");
    match state.shown() {
        None => c.box_line(&format!("{GREY}Press Enter to generate{RESET}")),
        Some(shown) => {
            c.box_wrapped(&shown.text());
            if shown.result.password().is_some() {
                let bits = shown.entropy_bits();
                c.box_rule();
                c.box_line(&format!(
                    "{:.1} bits ({}) {GREY}• Charset: {} chars{RESET}",
                    bits,
                    entropy::strength(bits),
                    shown.pool_size
                ));
            }
        }
    }
    c.box_bottom();

    if let Some(status) = state.status() {
        c.blank();
        c.box_line(&format!("{RED}{status}{RESET}"));
    }

    c.blank();
    c.box_line_center(&format!("{BOLD}{UNDERLINE}Keys{RESET}"));
    for hint in KEY_HINTS {
        c.box_line_center(&format!("{GREY}{hint}{RESET}"));
    }

    c.into_string()
}
