//! Ordered pools of tokens that selectors draw from.

use std::borrow::Cow;
use std::fmt;

/// Decimal digits `0-9`
pub const DIGITS: &str = "0123456789";
/// Lowercase ASCII letters
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Uppercase hexadecimal digits
pub const HEX_UPPER: &str = "0123456789ABCDEF";

/// An ordered sequence of single-character or token strings.
///
/// Draws over a pool are uniform over its length, so duplicated entries bias
/// the draw toward them. A pool may be empty; drawing from one is an error
/// reported by the selector, not by the pool.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CharPool<'a> {
    entries: Cow<'a, [&'a str]>,
}

impl<'a> CharPool<'a> {
    /// Pool borrowing a slice of tokens
    pub const fn from_tokens(tokens: &'a [&'a str]) -> Self {
        Self {
            entries: Cow::Borrowed(tokens),
        }
    }

    /// Pool owning its list of tokens
    pub fn from_vec(tokens: Vec<&'a str>) -> Self {
        Self {
            entries: Cow::Owned(tokens),
        }
    }

    /// Pool with one entry per character of `alphabet`
    pub fn from_alphabet(alphabet: &'a str) -> Self {
        let tokens = alphabet
            .char_indices()
            .map(|(idx, c)| &alphabet[idx..idx + c.len_utf8()])
            .collect();
        Self::from_vec(tokens)
    }

    /// Concatenate several pools, preserving their order
    pub fn concat<I>(pools: I) -> Self
    where
        I: IntoIterator<Item = CharPool<'a>>,
    {
        let mut tokens = Vec::new();
        for pool in pools {
            tokens.extend_from_slice(&pool.entries);
        }
        Self::from_vec(tokens)
    }

    /// Append the entries of another pool
    pub fn extend(&mut self, other: &CharPool<'a>) {
        self.entries.to_mut().extend_from_slice(&other.entries);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.entries.get(index).copied()
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().copied()
    }

    /// Whether `token` is one of the entries
    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|entry| *entry == token)
    }
}

impl fmt::Debug for CharPool<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<'a> From<&'a [&'a str]> for CharPool<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<'a> From<Vec<&'a str>> for CharPool<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        Self::from_vec(tokens)
    }
}
