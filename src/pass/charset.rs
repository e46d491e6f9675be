//! Character classes and pool building for password generation.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// A named, fixed set of characters that can be enabled in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical order used when building a pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Digits => "Digits (0-9)",
            CharacterClass::Symbols => "Symbols (!@#...)",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Digits => 0b0100,
            CharacterClass::Symbols => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled classes. Iterates in canonical order no matter how it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Build the character pool for the enabled classes.
pub fn build(classes: ClassSet) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(classes));

    for class in classes.iter() {
        chars.extend(class.chars().chars());
    }

    chars
}

/// Pool size without building it (for entropy display).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes_are_fixed() {
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Digits.chars().len(), 10);
        assert_eq!(CharacterClass::Symbols.chars().len(), 24);
    }

    #[test]
    fn empty_set_builds_empty_pool() {
        assert!(build(ClassSet::empty()).is_empty());
        assert_eq!(size(ClassSet::empty()), 0);
    }

    #[test]
    fn pool_follows_canonical_order() {
        let set: ClassSet = [CharacterClass::Symbols, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let pool: String = build(set).into_iter().collect();
        assert_eq!(pool, format!("{LOWERCASE}{SYMBOLS}"));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a: ClassSet = [CharacterClass::Symbols, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let b: ClassSet = [CharacterClass::Lowercase, CharacterClass::Symbols]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_eq!(build(a), build(b));
    }

    #[test]
    fn full_pool_has_86_chars() {
        assert_eq!(build(ClassSet::all()).len(), 86);
        assert_eq!(size(ClassSet::all()), 86);
    }

    #[test]
    fn set_and_remove() {
        let mut set = ClassSet::all();
        set.remove(CharacterClass::Digits);
        assert!(!set.contains(CharacterClass::Digits));
        assert_eq!(set.len(), 3);
        set.set(CharacterClass::Digits, true);
        assert_eq!(set, ClassSet::all());
    }
}
