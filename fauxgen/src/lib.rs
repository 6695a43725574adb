//! # Fauxgen - Fake Data Building Blocks
//!
//! Fauxgen provides the engine behind realistic-looking fake values: uniform
//! primitive draws over an injectable random source, digit templates,
//! fixed-width fields, positional layouts for identifiers such as MAC
//! addresses, and named word lexicons.
//!
//! Every draw goes through a [`RandomSource`], so a seeded source (or a
//! [`SequenceSource`] replaying fixed offsets) makes output reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use fauxgen::{BuiltinLexicon, LexiconCategory, RngSource, expand_template, random_word};
//!
//! let mut source = RngSource::seeded(42);
//!
//! let digits = expand_template(&mut source, "####", '#');
//! assert_eq!(digits.len(), 4);
//!
//! let name = random_word(&mut source, &BuiltinLexicon, &LexiconCategory::LAST_NAME).unwrap();
//! assert!(!name.is_empty());
//! ```

// Public modules
pub mod batch;
pub mod case;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod lexicon;
pub mod pool;
pub mod primitives;
pub mod range;
pub mod rng;
pub mod template;

// Re-export the main public API
pub use batch::generate_batch;
pub use case::LetterCase;
pub use config::{ConfigError, GeneratorConfig, ParallelConfig};
pub use error::{FauxError, Result};
pub use generator::{BoxedGenerator, ConstantGenerator, Generator, OneOfGenerator};
pub use layout::{PositionalLayout, Slot};
pub use lexicon::{BuiltinLexicon, LayeredLexicon, Lexicon, LexiconCategory, MapLexicon};
pub use pool::CharPool;
pub use primitives::*;
pub use range::IntRange;
pub use rng::{
    DefaultRngProvider, RandomSource, RngProvider, RngSource, SequenceSource, SharedSource,
};
pub use template::{
    DEFAULT_PLACEHOLDER, FormatTemplate, expand_template, hex_field, padded_number,
};
