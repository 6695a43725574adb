//! Primitive selectors: the leaf draws every recipe is built from.

use crate::error::{FauxError, Result};
use crate::lexicon::{Lexicon, LexiconCategory};
use crate::pool::CharPool;
use crate::range::IntRange;
use crate::rng::RandomSource;

/// Draw an integer uniformly from `[lo, hi]`
pub fn random_int(source: &mut dyn RandomSource, lo: i64, hi: i64) -> Result<i64> {
    Ok(IntRange::new(lo, hi)?.draw(source))
}

/// Draw one entry uniformly from `pool`
pub fn random_choice<'a>(source: &mut dyn RandomSource, pool: &CharPool<'a>) -> Result<&'a str> {
    if pool.is_empty() {
        return Err(FauxError::empty_pool("character pool"));
    }
    let index = source.int_inclusive(0, pool.len() as i64 - 1) as usize;
    pool.get(index)
        .ok_or_else(|| FauxError::empty_pool("character pool"))
}

/// Draw uniformly from a set of boolean outcomes.
///
/// Duplicated entries bias the draw: `[true, true, false]` yields `true` two
/// times in three.
pub fn random_bool(source: &mut dyn RandomSource, outcomes: &[bool]) -> Result<bool> {
    if outcomes.is_empty() {
        return Err(FauxError::empty_pool("boolean outcome set"));
    }
    let index = source.int_inclusive(0, outcomes.len() as i64 - 1) as usize;
    Ok(outcomes[index])
}

/// Resolve a lexicon category to its pool
pub fn lookup_lexicon<'l>(
    lexicon: &'l dyn Lexicon,
    category: &LexiconCategory,
) -> Result<CharPool<'l>> {
    match lexicon.entries(category) {
        Some(pool) => Ok(pool),
        None => {
            tracing::trace!(%category, "lexicon miss");
            Err(category.unknown())
        }
    }
}

/// Look up a category and draw one word from it
pub fn random_word(
    source: &mut dyn RandomSource,
    lexicon: &dyn Lexicon,
    category: &LexiconCategory,
) -> Result<String> {
    let pool = lookup_lexicon(lexicon, category)?;
    if pool.is_empty() {
        return Err(FauxError::empty_pool(format!("lexicon category {}", category)));
    }
    random_choice(source, &pool).map(str::to_string)
}
