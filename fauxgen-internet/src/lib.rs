//! # Fauxgen Internet
//!
//! Fake internet data built on the [`fauxgen`] engine.
//!
//! This crate provides generators for:
//! - **Domains**: domain names, suffixes, websites, URLs, HTTP methods
//! - **Network**: IPv4 and IPv6 addresses
//! - **Hardware**: MAC addresses and MEIDs
//! - **Text**: usernames and passwords
//!
//! Each generator is a fixed recipe over the engine's primitive draws,
//! templates and positional layouts. None of them keep state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use fauxgen_internet::prelude::*;
//!
//! // One-off values from the thread-local RNG
//! let mac = random_mac_address().unwrap();
//! assert_eq!(mac.len(), 17);
//!
//! // Reproducible values from a seeded faker
//! let mut faker = Faker::seeded(42);
//! let url = faker.url().unwrap();
//! assert!(url.starts_with("http://") || url.starts_with("https://"));
//! ```
//!
//! ## Custom sources and lexicons
//!
//! ```rust
//! use fauxgen::{BuiltinLexicon, Generator, LayeredLexicon, LexiconCategory, MapLexicon, SequenceSource};
//! use fauxgen_internet::prelude::*;
//!
//! let lexicon = LayeredLexicon::new(
//!     MapLexicon::new().with(&LexiconCategory::LAST_NAME, ["Hopper"]),
//!     BuiltinLexicon,
//! );
//! let mut source = SequenceSource::new(vec![0, 1, 9, 8, 4]);
//!
//! let name = UserNameGenerator.generate(&mut source, &lexicon).unwrap();
//! assert_eq!(name, "Hopper1984");
//! ```
//!
//! ## Batches
//!
//! ```rust
//! use fauxgen::{BuiltinLexicon, ParallelConfig, generate_batch};
//! use fauxgen_internet::prelude::*;
//!
//! let addresses: Vec<String> = generate_batch(
//!     &IpAddressGenerator::V4,
//!     &BuiltinLexicon,
//!     500,
//!     Some(7),
//!     &ParallelConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(addresses.len(), 500);
//! ```

pub mod faker;
pub mod generators;

pub use faker::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::faker::*;
    pub use crate::generators::domain::*;
    pub use crate::generators::hardware::*;
    pub use crate::generators::network::*;
    pub use crate::generators::text::*;
}
