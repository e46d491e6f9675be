//! Password generation settings.
//!
//! Held in memory only. Defaults are layered under the `PASSGEN_LENGTH`
//! environment variable and CLI flags (see `cli`).

use std::time::Duration;

use crate::pass::{CharacterClass, ClassSet, Request};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub copy_feedback: Duration,
    pub to_clipboard: bool,
    pub show_entropy: bool,
}

impl Settings {
    pub fn request(&self) -> Request {
        Request::new(self.pass_length, self.classes)
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.classes.set(class, enabled);
    }

    /// Length clamped to the slider bounds.
    pub fn clamped_length(&self) -> usize {
        self.pass_length.clamp(self.min_length, self.max_length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            classes: ClassSet::all(),
            number_of_passwords: 1,
            copy_feedback: Duration::from_millis(2000),
            to_clipboard: false,
            show_entropy: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.pass_length, 16);
        assert_eq!(s.classes, ClassSet::all());
        assert_eq!(s.copy_feedback, Duration::from_millis(2000));
        assert_eq!(s.request(), Request::new(16, ClassSet::all()));
    }

    #[test]
    fn clamps_to_bounds() {
        let mut s = Settings {
            pass_length: 1000,
            ..Default::default()
        };
        assert_eq!(s.clamped_length(), MAX_LENGTH);
        s.pass_length = 0;
        assert_eq!(s.clamped_length(), MIN_LENGTH);
    }

    #[test]
    fn set_class_toggles_request() {
        let mut s = Settings::default();
        s.set_class(CharacterClass::Symbols, false);
        assert!(!s.request().classes.contains(CharacterClass::Symbols));
    }
}
