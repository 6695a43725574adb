//! Whole-string case transforms.

use crate::error::Result;
use crate::primitives::random_bool;
use crate::rng::RandomSource;

/// Case applied to a fully rendered identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    /// Uppercase every letter
    Upper,
    /// Lowercase every letter
    Lower,
    /// Leave the rendered string untouched
    #[default]
    Preserve,
}

impl LetterCase {
    /// `Upper` when `uppercase` is set, otherwise `Lower`
    pub fn from_flag(uppercase: bool) -> Self {
        if uppercase { Self::Upper } else { Self::Lower }
    }

    /// Upper or lower, chosen with equal odds
    pub fn random(source: &mut dyn RandomSource) -> Result<Self> {
        random_bool(source, &[true, false]).map(Self::from_flag)
    }

    /// Apply the case to the whole string at once.
    ///
    /// Only ASCII letters change, so digits, separators and the string
    /// length are untouched.
    pub fn apply(self, mut rendered: String) -> String {
        match self {
            Self::Upper => rendered.make_ascii_uppercase(),
            Self::Lower => rendered.make_ascii_lowercase(),
            Self::Preserve => {}
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    #[test]
    fn test_apply() {
        assert_eq!(LetterCase::Upper.apply("a0:bc".to_string()), "A0:BC");
        assert_eq!(LetterCase::Lower.apply("A0-BC".to_string()), "a0-bc");
        assert_eq!(LetterCase::Preserve.apply("aB".to_string()), "aB");
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(LetterCase::from_flag(true), LetterCase::Upper);
        assert_eq!(LetterCase::from_flag(false), LetterCase::Lower);
    }

    #[test]
    fn test_random_follows_source() {
        let mut source = SequenceSource::new(vec![0, 1]);
        assert_eq!(LetterCase::random(&mut source).unwrap(), LetterCase::Upper);
        assert_eq!(LetterCase::random(&mut source).unwrap(), LetterCase::Lower);
    }
}
