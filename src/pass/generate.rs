//! Password generation.

use std::fmt;

use rand::Rng;

use super::Password;
use super::charset::{self, ClassSet};

/// Shown in place of a password when no character class is enabled.
pub const NO_CLASS_SELECTED: &str = "Debe seleccionar al menos un tipo de carácter.";

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub classes: ClassSet,
}

impl Request {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

/// Result of a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Password(Password),
    NoClassSelected,
}

impl Generated {
    pub fn password(&self) -> Option<&Password> {
        match self {
            Generated::Password(p) => Some(p),
            Generated::NoClassSelected => None,
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, Generated::Password(_))
    }
}

/// Renders the password, or the fixed message when no class was enabled.
impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generated::Password(p) => fmt::Display::fmt(p, f),
            Generated::NoClassSelected => f.write_str(NO_CLASS_SELECTED),
        }
    }
}

/// Generate a single password. Each position is an independent uniform draw
/// from the pool of enabled classes.
pub fn generate<R: Rng + ?Sized>(request: Request, rng: &mut R) -> Generated {
    let chars = charset::build(request.classes);
    if chars.is_empty() {
        return Generated::NoClassSelected;
    }
    Generated::Password(generate_from_charset(&chars, request.length, rng))
}

/// Same as [`generate`], taking the length and classes directly.
pub fn generate_with<R: Rng + ?Sized>(length: usize, classes: ClassSet, rng: &mut R) -> Generated {
    generate(Request::new(length, classes), rng)
}

/// Lazily generate `count` passwords sharing one pool.
/// Returns `None` when no class is enabled.
pub fn generate_batch<R: Rng + ?Sized>(
    request: Request,
    count: usize,
    rng: &mut R,
) -> Option<impl Iterator<Item = Password>> {
    let chars = charset::build(request.classes);
    if chars.is_empty() {
        return None;
    }
    Some((0..count).map(move |_| generate_from_charset(&chars, request.length, rng)))
}

/// Caller guarantees `chars` is non-empty.
#[inline]
fn generate_from_charset<R: Rng + ?Sized>(chars: &[char], length: usize, rng: &mut R) -> Password {
    let mut buf = String::with_capacity(length);
    buf.extend((0..length).map(|_| random_char(chars, rng)));
    Password::from_string(buf)
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}
