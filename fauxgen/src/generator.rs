//! Core generator trait and small building-block generators.

use crate::error::{FauxError, Result};
use crate::lexicon::Lexicon;
use crate::rng::RandomSource;

/// A recipe producing one fake value per call
pub trait Generator<T> {
    /// Generate a value, drawing from `source` and resolving words through `lexicon`
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<T>;
}

impl<T, G: Generator<T> + ?Sized> Generator<T> for &G {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<T> {
        (**self).generate(source, lexicon)
    }
}

impl<T, G: Generator<T> + ?Sized> Generator<T> for Box<G> {
    fn generate(&self, source: &mut dyn RandomSource, lexicon: &dyn Lexicon) -> Result<T> {
        (**self).generate(source, lexicon)
    }
}

/// Type-erased generator that can be shared across threads
pub type BoxedGenerator<T> = Box<dyn Generator<T> + Send + Sync>;

/// A generator that always produces the same value
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

impl<T: Clone> ConstantGenerator<T> {
    /// Create a new constant generator
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Generator<T> for ConstantGenerator<T> {
    fn generate(&self, _source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<T> {
        Ok(self.value.clone())
    }
}

/// A generator that chooses uniformly from a fixed list of values
#[derive(Debug, Clone)]
pub struct OneOfGenerator<T> {
    values: Vec<T>,
}

impl<T: Clone> OneOfGenerator<T> {
    /// Create a new one-of generator, failing on an empty list
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(FauxError::empty_pool("one-of value list"));
        }
        Ok(Self { values })
    }

    /// The candidate values
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone> Generator<T> for OneOfGenerator<T> {
    fn generate(&self, source: &mut dyn RandomSource, _lexicon: &dyn Lexicon) -> Result<T> {
        let index = source.int_inclusive(0, self.values.len() as i64 - 1) as usize;
        Ok(self.values[index].clone())
    }
}
