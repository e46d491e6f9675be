use clap::Parser;

use crate::pass::CharacterClass;
use crate::settings::Settings;

/// Generate random passwords from selectable character classes.
///
/// Run without arguments to open the interactive form.
#[derive(Debug, Parser)]
#[command(name = "passgen", version)]
pub struct CliFlags {
    /// Password length
    #[arg(short, long, env = "PASSGEN_LENGTH")]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print entropy estimate to stderr
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form, preset from the other flags
    #[arg(long)]
    pub tui: bool,
}

impl CliFlags {
    /// Defaults overridden by whatever was given on the command line.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(len) = self.length {
            settings.pass_length = len;
        }
        settings.number_of_passwords = self.number;

        let disabled = [
            (CharacterClass::Lowercase, self.no_lower),
            (CharacterClass::Uppercase, self.no_upper),
            (CharacterClass::Digits, self.no_digits),
            (CharacterClass::Symbols, self.no_symbols),
        ];
        for (class, off) in disabled {
            if off {
                settings.set_class(class, false);
            }
        }

        settings.to_clipboard = self.clipboard;
        settings.show_entropy = self.entropy;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn defaults_enable_everything() {
        let s = parse(&[]).settings();
        assert_eq!(s.classes, ClassSet::all());
        assert_eq!(s.number_of_passwords, 1);
        assert!(!s.to_clipboard);
    }

    #[test]
    fn class_flags_disable_classes() {
        let s = parse(&["--no-upper", "--no-symbols", "-l", "8"]).settings();
        let expected: ClassSet = [CharacterClass::Lowercase, CharacterClass::Digits]
            .into_iter()
            .collect();
        assert_eq!(s.classes, expected);
        assert_eq!(s.pass_length, 8);
    }

    #[test]
    fn all_classes_can_be_disabled() {
        let s = parse(&["--no-lower", "--no-upper", "--no-digits", "--no-symbols"]).settings();
        assert!(s.classes.is_empty());
    }

    #[test]
    fn zero_length_is_accepted() {
        assert_eq!(parse(&["--length", "0"]).settings().pass_length, 0);
    }

    #[test]
    fn rejects_bad_length() {
        assert!(CliFlags::try_parse_from(["passgen", "-l", "abc"]).is_err());
        assert!(CliFlags::try_parse_from(["passgen", "--bogus"]).is_err());
    }

    #[test]
    fn short_flags() {
        let f = parse(&["-b", "-e", "-q", "-n", "3"]);
        assert!(f.clipboard && f.entropy && f.quiet);
        assert_eq!(f.number, 3);
    }
}
