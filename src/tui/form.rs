//! Form state and key handling.
//!
//! Everything here is plain data: the event loop in `tui::run` feeds keys in
//! and acts on the returned [`Action`]. Only one handler runs at a time.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::clipboard::{CopyFeedback, CopyOutcome};
use crate::pass::{self, CharacterClass, ClassSet, Generated, charset, entropy};
use crate::settings::Settings;

const PAGE_STEP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Class(CharacterClass),
    Generate,
    Copy,
}

pub const FIELDS: [Field; 7] = [
    Field::Length,
    Field::Class(CharacterClass::Lowercase),
    Field::Class(CharacterClass::Uppercase),
    Field::Class(CharacterClass::Digits),
    Field::Class(CharacterClass::Symbols),
    Field::Generate,
    Field::Copy,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Generate,
    Copy,
    Quit,
}

/// What the display area currently shows.
#[derive(Debug, Clone)]
pub struct Shown {
    pub result: Generated,
    pub pool_size: usize,
}

impl Shown {
    pub fn text(&self) -> String {
        self.result.to_string()
    }

    pub fn entropy_bits(&self) -> f64 {
        match &self.result {
            Generated::Password(p) => entropy::bits(p.char_count(), self.pool_size),
            Generated::NoClassSelected => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    length: usize,
    min_length: usize,
    max_length: usize,
    classes: ClassSet,
    focus: usize,
    shown: Option<Shown>,
    feedback: CopyFeedback,
    status: Option<String>,
}

impl FormState {
    pub fn new(settings: &Settings) -> Self {
        let classes = if settings.classes.is_empty() {
            tracing::warn!("no character class enabled, starting with all of them");
            ClassSet::all()
        } else {
            settings.classes
        };
        Self {
            length: settings.clamped_length(),
            min_length: settings.min_length,
            max_length: settings.max_length,
            classes,
            focus: 0,
            shown: None,
            feedback: CopyFeedback::new(settings.copy_feedback),
            status: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn focused(&self) -> Field {
        FIELDS[self.focus]
    }

    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }

    pub fn copy_label(&self) -> &'static str {
        self.feedback.label()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Flip a class toggle, refusing to uncheck the last checked one.
    /// Returns false when the change was refused.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = self.classes.contains(class);
        if enabled && self.classes.len() == 1 {
            tracing::debug!(%class, "kept last selected class checked");
            return false;
        }
        self.classes.set(class, !enabled);
        true
    }

    pub fn adjust_length(&mut self, delta: isize) {
        let next = self.length.saturating_add_signed(delta);
        self.length = next.clamp(self.min_length, self.max_length);
    }

    fn move_focus(&mut self, forward: bool) {
        let n = FIELDS.len();
        self.focus = if forward {
            (self.focus + 1) % n
        } else {
            (self.focus + n - 1) % n
        };
    }

    /// Generate from the current form values and show the result.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let result = pass::generate_with(self.length, self.classes, rng);
        if !result.is_password() {
            tracing::warn!("generate requested with no character class");
        }
        self.shown = Some(Shown {
            result,
            pool_size: charset::size(self.classes),
        });
        self.status = None;
    }

    /// Text the copy button would send, if anything is shown.
    pub fn copy_text(&self) -> Option<String> {
        self.shown.as_ref().map(Shown::text)
    }

    pub fn on_copy_outcome(&mut self, outcome: CopyOutcome, now: Instant) {
        match outcome {
            CopyOutcome::Copied => {
                self.feedback.copied(now);
                self.status = None;
            }
            CopyOutcome::Failed(e) => {
                tracing::error!("error copying password: {e}");
                self.status = Some(e.to_string());
            }
        }
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Up | KeyCode::BackTab => {
                self.move_focus(false);
                Action::Redraw
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_focus(true);
                Action::Redraw
            }
            KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char(d @ '1'..='4') => {
                let idx = d as usize - '1' as usize;
                self.toggle(CharacterClass::ALL[idx]);
                Action::Redraw
            }
            KeyCode::Enter => match self.focused() {
                Field::Copy => Action::Copy,
                _ => Action::Generate,
            },
            KeyCode::Char(' ') => match self.focused() {
                Field::Class(class) => {
                    self.toggle(class);
                    Action::Redraw
                }
                Field::Generate => Action::Generate,
                Field::Copy => Action::Copy,
                Field::Length => Action::None,
            },
            code if self.focused() == Field::Length => self.handle_slider(code),
            _ => Action::None,
        }
    }

    fn handle_slider(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Left | KeyCode::Char('-') => self.adjust_length(-1),
            KeyCode::Right | KeyCode::Char('+') => self.adjust_length(1),
            KeyCode::PageDown => self.adjust_length(-(PAGE_STEP as isize)),
            KeyCode::PageUp => self.adjust_length(PAGE_STEP as isize),
            KeyCode::Home => self.length = self.min_length,
            KeyCode::End => self.length = self.max_length,
            _ => return Action::None,
        }
        Action::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{COPIED_LABEL, COPY_LABEL};
    use crate::error::ClipboardError;
    use crate::pass::NO_CLASS_SELECTED;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormState {
        FormState::new(&Settings::default())
    }

    fn only(class: CharacterClass) -> Settings {
        Settings {
            classes: [class].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn last_class_cannot_be_unchecked() {
        let mut f = FormState::new(&only(CharacterClass::Digits));
        assert!(!f.toggle(CharacterClass::Digits));
        assert!(f.classes().contains(CharacterClass::Digits));
        assert_eq!(f.classes().len(), 1);
    }

    #[test]
    fn guard_holds_through_any_toggle_sequence() {
        let mut f = form();
        for class in CharacterClass::ALL.into_iter().cycle().take(40) {
            f.toggle(class);
            assert!(!f.classes().is_empty());
        }
    }

    #[test]
    fn unchecking_with_others_selected_is_allowed() {
        let mut f = form();
        assert!(f.toggle(CharacterClass::Symbols));
        assert!(!f.classes().contains(CharacterClass::Symbols));
        assert!(f.toggle(CharacterClass::Symbols));
        assert!(f.classes().contains(CharacterClass::Symbols));
    }

    #[test]
    fn empty_settings_start_with_all_classes() {
        let f = FormState::new(&Settings {
            classes: ClassSet::empty(),
            ..Default::default()
        });
        assert_eq!(f.classes(), ClassSet::all());
    }

    #[test]
    fn slider_stays_in_bounds() {
        let mut f = form();
        let (min, max) = f.bounds();
        assert_eq!(f.handle_key(key(KeyCode::Home)), Action::Redraw);
        assert_eq!(f.length(), min);
        f.handle_key(key(KeyCode::Left));
        assert_eq!(f.length(), min);
        f.handle_key(key(KeyCode::End));
        f.handle_key(key(KeyCode::PageUp));
        assert_eq!(f.length(), max);
        f.handle_key(key(KeyCode::PageDown));
        assert_eq!(f.length(), max - PAGE_STEP);
    }

    #[test]
    fn slider_keys_only_apply_when_focused() {
        let mut f = form();
        let before = f.length();
        f.handle_key(key(KeyCode::Down));
        assert_eq!(f.focused(), Field::Class(CharacterClass::Lowercase));
        assert_eq!(f.handle_key(key(KeyCode::Right)), Action::None);
        assert_eq!(f.length(), before);
    }

    #[test]
    fn focus_wraps() {
        let mut f = form();
        f.handle_key(key(KeyCode::Up));
        assert_eq!(f.focused(), Field::Copy);
        f.handle_key(key(KeyCode::Tab));
        assert_eq!(f.focused(), Field::Length);
    }

    #[test]
    fn space_toggles_focused_class() {
        let mut f = form();
        f.handle_key(key(KeyCode::Down));
        f.handle_key(key(KeyCode::Char(' ')));
        assert!(!f.classes().contains(CharacterClass::Lowercase));
    }

    #[test]
    fn number_keys_toggle_classes() {
        let mut f = form();
        f.handle_key(key(KeyCode::Char('3')));
        assert!(!f.classes().contains(CharacterClass::Digits));
    }

    #[test]
    fn enter_submits_except_on_copy() {
        let mut f = form();
        assert_eq!(f.handle_key(key(KeyCode::Enter)), Action::Generate);
        f.handle_key(key(KeyCode::BackTab));
        assert_eq!(f.focused(), Field::Copy);
        assert_eq!(f.handle_key(key(KeyCode::Enter)), Action::Copy);
    }

    #[test]
    fn quit_keys() {
        let mut f = form();
        assert_eq!(f.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(f.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            f.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn submit_shows_password_of_slider_length() {
        let mut f = FormState::new(&only(CharacterClass::Uppercase));
        let mut rng = StdRng::seed_from_u64(7);
        f.submit(&mut rng);
        let text = f.copy_text().expect("something shown");
        assert_eq!(text.chars().count(), f.length());
        assert!(text.chars().all(|c| c.is_ascii_uppercase()));
        assert!(f.shown().unwrap().entropy_bits() > 0.0);
    }

    #[test]
    fn submit_with_no_classes_shows_message() {
        let mut f = form();
        f.classes = ClassSet::empty();
        f.submit(&mut StdRng::seed_from_u64(1));
        assert_eq!(f.copy_text().as_deref(), Some(NO_CLASS_SELECTED));
        assert_eq!(f.shown().unwrap().entropy_bits(), 0.0);
    }

    #[test]
    fn nothing_to_copy_before_submit() {
        assert!(form().copy_text().is_none());
    }

    #[test]
    fn copy_success_flips_label_then_reverts() {
        let mut f = form();
        let now = Instant::now();
        f.on_copy_outcome(CopyOutcome::Copied, now);
        assert_eq!(f.copy_label(), COPIED_LABEL);
        assert!(!f.tick(now + Duration::from_millis(1000)));
        assert!(f.tick(now + Duration::from_millis(2000)));
        assert_eq!(f.copy_label(), COPY_LABEL);
    }

    #[test]
    fn copy_failure_keeps_password() {
        let mut f = form();
        f.submit(&mut StdRng::seed_from_u64(3));
        let before = f.copy_text();
        f.on_copy_outcome(
            CopyOutcome::Failed(ClipboardError::Write("denied".into())),
            Instant::now(),
        );
        assert_eq!(f.copy_text(), before);
        assert_eq!(f.copy_label(), COPY_LABEL);
        assert!(f.status().unwrap().contains("denied"));
    }
}
