//! Hardware identifier generators
//!
//! This module provides generators for:
//! - MAC addresses, laid out as six hex pairs joined by a separator
//! - MEIDs, three fixed-width hex fields without a check digit

use fauxgen::pool::HEX_UPPER;
use fauxgen::{
    CharPool, Generator, IntRange, LetterCase, Lexicon, PositionalLayout, RandomSource, Result,
    Slot, hex_field, random_choice,
};

/// Hex digits allowed at the second position of a MAC address.
///
/// Keeping that nibble even clears the multicast bit of the first octet.
pub const MAC_EVEN_NIBBLES: &[&str] = &["0", "2", "4", "6", "8", "A", "C", "E"];
/// Separators a random MAC address picks from
pub const MAC_SEPARATORS: &[&str] = &["-", ":"];
/// Characters in a rendered MEID
pub const MEID_LEN: usize = 14;

/// Slot holding the second hex digit
const MAC_RESTRICTED_SLOT: usize = 1;

// ============================================================================
// MAC Address Generator
// ============================================================================

/// Generator for MAC addresses such as `0a-1b-2c-3d-4e-5f`.
///
/// A fixed separator and case may be supplied; anything left unset is drawn
/// per address, separator first and case second, before the hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddressGenerator {
    separator: Option<String>,
    case: Option<LetterCase>,
}

impl MacAddressGenerator {
    /// Create a generator with a fixed separator and case
    pub fn new(separator: impl Into<String>, uppercase: bool) -> Self {
        Self {
            separator: Some(separator.into()),
            case: Some(LetterCase::from_flag(uppercase)),
        }
    }

    /// Create a generator that picks `-` or `:` and upper or lower case at random
    pub fn random() -> Self {
        Self {
            separator: None,
            case: None,
        }
    }

    /// The 17-slot layout shared by every MAC address
    pub fn layout() -> Result<PositionalLayout> {
        PositionalLayout::grouped(6, 2).with_slot(MAC_RESTRICTED_SLOT, Slot::Restricted)
    }
}

impl Generator<String> for MacAddressGenerator {
    fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<String> {
        let separator = match &self.separator {
            Some(separator) => separator.clone(),
            None => random_choice(source, &CharPool::from_tokens(MAC_SEPARATORS))?.to_string(),
        };
        let case = match self.case {
            Some(case) => case,
            None => LetterCase::random(source)?,
        };

        let rendered = Self::layout()?.render(
            source,
            &CharPool::from_alphabet(HEX_UPPER),
            &CharPool::from_tokens(MAC_EVEN_NIBBLES),
            &separator,
        )?;
        Ok(case.apply(rendered))
    }
}

// ============================================================================
// MEID Generator
// ============================================================================

/// Generator for Mobile Equipment Identifiers: `RRXXXXXXZZZZZZ`.
///
/// `RR` lies in `[0xA0, 0xFF]`; the two six-digit fields cover the full
/// 24-bit range. The trailing check digit is not produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeidGenerator {
    case: Option<LetterCase>,
}

impl MeidGenerator {
    /// Create a generator; `uppercase` selects `A-F` over `a-f`
    pub fn new(uppercase: bool) -> Self {
        Self {
            case: Some(LetterCase::from_flag(uppercase)),
        }
    }

    /// Create a generator that picks the case at random
    pub fn random() -> Self {
        Self { case: None }
    }
}

impl Generator<String> for MeidGenerator {
    fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<String> {
        let case = match self.case {
            Some(case) => case,
            None => LetterCase::random(source)?,
        };

        let serial = IntRange::new(0, 0xFF_FFFF)?;
        let mut meid = String::with_capacity(MEID_LEN);
        meid.push_str(&hex_field(source, IntRange::new(0xA0, 0xFF)?, 2)?);
        meid.push_str(&hex_field(source, serial, 6)?);
        meid.push_str(&hex_field(source, serial, 6)?);
        Ok(case.apply(meid))
    }
}
