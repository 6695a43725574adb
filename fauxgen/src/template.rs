//! Placeholder templates and fixed-width numeric fields.

use std::borrow::Cow;

use crate::error::{FauxError, Result};
use crate::pool::DIGITS;
use crate::range::IntRange;
use crate::rng::RandomSource;

/// Conventional placeholder marker
pub const DEFAULT_PLACEHOLDER: char = '#';

/// A template whose placeholder characters expand to random digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate<'a> {
    template: Cow<'a, str>,
    placeholder: char,
}

impl<'a> FormatTemplate<'a> {
    /// Template using the `#` placeholder
    pub fn new(template: impl Into<Cow<'a, str>>) -> Self {
        Self::with_placeholder(template, DEFAULT_PLACEHOLDER)
    }

    /// Template using a custom placeholder
    pub fn with_placeholder(template: impl Into<Cow<'a, str>>, placeholder: char) -> Self {
        Self {
            template: template.into(),
            placeholder,
        }
    }

    /// The raw template text
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Number of placeholders, and therefore digit draws, in the template
    pub fn placeholders(&self) -> usize {
        self.template
            .chars()
            .filter(|&c| c == self.placeholder)
            .count()
    }

    /// Expand every placeholder into an independently drawn digit
    pub fn expand(&self, source: &mut dyn RandomSource) -> String {
        expand_template(source, &self.template, self.placeholder)
    }
}

/// Replace each `placeholder` in `template` with a digit drawn from `0-9`.
///
/// Other characters pass through unchanged, so the output has the same
/// character count and order as the template. Digits are drawn left to right.
pub fn expand_template(source: &mut dyn RandomSource, template: &str, placeholder: char) -> String {
    let digits = DIGITS.as_bytes();
    let mut expanded = String::with_capacity(template.len());
    for c in template.chars() {
        if c == placeholder {
            let index = source.int_inclusive(0, digits.len() as i64 - 1) as usize;
            expanded.push(char::from(digits[index]));
        } else {
            expanded.push(c);
        }
    }
    expanded
}

/// Draw from `range` and format as zero-padded decimal of at least `width`
pub fn padded_number(source: &mut dyn RandomSource, range: IntRange, width: usize) -> String {
    format!("{:0width$}", range.draw(source), width = width)
}

/// Draw from `range` and format as zero-padded lowercase hex of at least `width`.
///
/// Fails with [`FauxError::InvalidRange`] when the range reaches below
/// zero, since negative values have no fixed-width hex form.
pub fn hex_field(source: &mut dyn RandomSource, range: IntRange, width: usize) -> Result<String> {
    if range.lo() < 0 {
        return Err(FauxError::InvalidRange {
            lo: range.lo(),
            hi: range.hi(),
        });
    }
    Ok(format!("{:0width$x}", range.draw(source), width = width))
}
