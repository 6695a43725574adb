//! Account text generators
//!
//! This module provides generators for:
//! - Usernames: a last name followed by four digits
//! - Passwords drawn from a selectable set of character classes

use fauxgen::pool::{DIGITS, LOWERCASE, UPPERCASE};
use fauxgen::{
    CharPool, FormatTemplate, Generator, Lexicon, LexiconCategory, RandomSource, Result,
    random_choice, random_word,
};

/// Special characters a password may draw from
pub const PASSWORD_SPECIAL: &str = "!@#$%&?-_";
/// The space character class
pub const PASSWORD_SPACE: &str = " ";

const USERNAME_SUFFIX: &str = "####";

// ============================================================================
// Username Generator
// ============================================================================

/// Generator for usernames such as `Walker4821`
#[derive(Debug, Clone, Copy, Default)]
pub struct UserNameGenerator;

impl Generator<String> for UserNameGenerator {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<String> {
        let mut name = random_word(source, lexicon, &LexiconCategory::LAST_NAME)?;
        name.push_str(&FormatTemplate::new(USERNAME_SUFFIX).expand(source));
        Ok(name)
    }
}

// ============================================================================
// Password Generator
// ============================================================================

/// Generator for passwords of a fixed length.
///
/// The alphabet is the concatenation of every selected character class.
/// Selecting none falls back to lowercase letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordGenerator {
    lower: bool,
    upper: bool,
    numeric: bool,
    special: bool,
    space: bool,
    length: usize,
}

impl PasswordGenerator {
    /// Create a password generator from character class flags and a length
    pub fn new(
        lower: bool,
        upper: bool,
        numeric: bool,
        special: bool,
        space: bool,
        length: usize,
    ) -> Self {
        Self {
            lower,
            upper,
            numeric,
            special,
            space,
            length,
        }
    }

    /// Number of characters per password
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether no character class is selected
    pub fn uses_default_alphabet(&self) -> bool {
        !(self.lower || self.upper || self.numeric || self.special || self.space)
    }

    /// The working alphabet for the selected classes
    pub fn alphabet(&self) -> CharPool<'static> {
        if self.uses_default_alphabet() {
            return CharPool::concat([
                CharPool::from_alphabet(LOWERCASE),
                CharPool::from_alphabet(DIGITS),
            ]);
        }

        let classes = [
            (self.lower, LOWERCASE),
            (self.upper, UPPERCASE),
            (self.numeric, DIGITS),
            (self.special, PASSWORD_SPECIAL),
            (self.space, PASSWORD_SPACE),
        ];
        CharPool::concat(
            classes
                .into_iter()
                .filter(|(selected, _)| *selected)
                .map(|(_, alphabet)| CharPool::from_alphabet(alphabet)),
        )
    }
}

impl Generator<String> for PasswordGenerator {
    fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<String> {
        if self.uses_default_alphabet() {
            tracing::debug!("no password character class selected, using lowercase and digits");
        }

        let alphabet = self.alphabet();
        let mut password = String::with_capacity(self.length);
        for _ in 0..self.length {
            password.push_str(random_choice(source, &alphabet)?);
        }
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxgen::{BuiltinLexicon, MapLexicon, RngSource, SequenceSource};
    use rand::thread_rng;

    #[test]
    fn test_user_name_follows_sequence() {
        let lexicon = MapLexicon::new().with(&LexiconCategory::LAST_NAME, ["Okafor", "Lind"]);
        let mut source = SequenceSource::new(vec![1, 0, 4, 2, 9]);
        let name = UserNameGenerator.generate(&mut source, &lexicon).unwrap();
        assert_eq!(name, "Lind0429");
    }

    #[test]
    fn test_user_name_generator() {
        let mut source = RngSource::new(thread_rng());

        for _ in 0..100 {
            let name = UserNameGenerator
                .generate(&mut source, &BuiltinLexicon)
                .unwrap();
            let (word, digits) = name.split_at(name.len() - 4);
            assert!(!word.is_empty());
            assert!(word.chars().all(char::is_alphabetic));
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_password_lowercase_only() {
        let generator = PasswordGenerator::new(true, false, false, false, false, 10);
        let mut source = RngSource::new(thread_rng());

        for _ in 0..100 {
            let password = generator.generate(&mut source, &BuiltinLexicon).unwrap();
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_password_default_alphabet() {
        let generator = PasswordGenerator::new(false, false, false, false, false, 8);
        assert!(generator.uses_default_alphabet());
        assert_eq!(generator.alphabet().len(), 36);

        let mut source = RngSource::new(thread_rng());
        for _ in 0..100 {
            let password = generator.generate(&mut source, &BuiltinLexicon).unwrap();
            assert_eq!(password.len(), 8);
            assert!(
                password
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn test_password_alphabet_sizes() {
        let all = PasswordGenerator::new(true, true, true, true, true, 1);
        assert_eq!(all.alphabet().len(), 26 + 26 + 10 + 9 + 1);

        let special = PasswordGenerator::new(false, false, false, true, false, 1);
        assert_eq!(special.alphabet().iter().collect::<String>(), PASSWORD_SPECIAL);

        let upper_digits = PasswordGenerator::new(false, true, true, false, false, 1);
        assert!(upper_digits.alphabet().contains("Z"));
        assert!(upper_digits.alphabet().contains("7"));
        assert!(!upper_digits.alphabet().contains("z"));
    }

    #[test]
    fn test_password_follows_sequence() {
        // Alphabet order is lower, upper, digits, special, space.
        let generator = PasswordGenerator::new(true, true, false, false, true, 4);
        let mut source = SequenceSource::new(vec![0, 26, 51, 52]);
        let password = generator.generate(&mut source, &BuiltinLexicon).unwrap();
        assert_eq!(password, "aAZ ");
    }

    #[test]
    fn test_password_zero_length() {
        let generator = PasswordGenerator::new(true, false, false, false, false, 0);
        let mut source = SequenceSource::default();
        assert_eq!(
            generator.generate(&mut source, &BuiltinLexicon).unwrap(),
            ""
        );
        assert_eq!(source.draws(), 0);
    }
}
