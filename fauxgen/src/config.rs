//! Configuration types for sources, lexicons and batch generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::{BuiltinLexicon, LayeredLexicon, MapLexicon};
use crate::rng::{DefaultRngProvider, RngProvider, RngSource};

/// Configuration validation errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid number of threads (must be > 0)
    #[error("Invalid thread count: {0} (must be > 0)")]
    InvalidThreads(usize),
    /// Invalid batch size (must be > 0)
    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),
}

/// Configuration for parallel batch generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of worker threads
    pub num_threads: usize,
    /// Batches smaller than this run on the calling thread
    pub batch_size: usize,
    /// Whether to split work across threads at all
    pub enabled: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            batch_size: 64,
            enabled: true,
        }
    }
}

impl ParallelConfig {
    /// Configuration that always runs on the calling thread
    pub fn sequential() -> Self {
        Self {
            num_threads: 1,
            enabled: false,
            ..Self::default()
        }
    }

    /// Create a new parallel configuration with validation
    pub fn new(num_threads: usize, batch_size: usize) -> std::result::Result<Self, ConfigError> {
        let config = Self {
            num_threads,
            batch_size,
            enabled: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the parallel configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.num_threads == 0 {
            return Err(ConfigError::InvalidThreads(self.num_threads));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

/// Top-level generator configuration.
///
/// ```json
/// { "seed": 7, "lexicon_path": "words.json", "parallel": { "num_threads": 4 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for reproducible output; entropy when absent
    pub seed: Option<u64>,
    /// JSON lexicon layered over the builtin word lists
    pub lexicon_path: Option<PathBuf>,
    /// Batch generation settings
    pub parallel: ParallelConfig,
}

impl GeneratorConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.parallel.validate()
    }

    /// Random source described by this configuration
    pub fn source(&self) -> RngSource<rand::rngs::StdRng> {
        RngSource::new(DefaultRngProvider.create_rng(self.seed))
    }

    /// Lexicon described by this configuration: the configured file layered
    /// over the builtin lists, or the builtin lists alone
    pub fn lexicon(&self) -> Result<LayeredLexicon<MapLexicon, BuiltinLexicon>> {
        let overrides = match &self.lexicon_path {
            Some(path) => MapLexicon::from_path(path)?,
            None => MapLexicon::new(),
        };
        Ok(LayeredLexicon::new(overrides, BuiltinLexicon))
    }
}
