//! Password generation.

pub mod charset;
pub mod entropy;
mod generate;
mod password;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Generated, Request, generate, generate_batch, generate_with};
#[cfg(test)]
pub use generate::NO_CLASS_SELECTED;
pub use password::Password;
