//! Error types for token generation.
//!
//! Every variant here is a configuration or programming error: a recipe asked
//! for an impossible range, drew from an empty pool, or named a lexicon
//! category that the supplied lexicon does not carry. None of them are
//! transient, so callers should surface them rather than retry.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors produced by the generation engine
#[derive(thiserror::Error, Debug)]
pub enum FauxError {
    /// A numeric draw was requested with `lo > hi`
    #[error("Invalid range: lower bound {lo} exceeds upper bound {hi}")]
    InvalidRange {
        /// Requested lower bound
        lo: i64,
        /// Requested upper bound
        hi: i64,
    },

    /// A draw was requested from a pool with no entries
    #[error("Cannot draw from empty {what}")]
    EmptyPool {
        /// What kind of pool was empty
        what: String,
    },

    /// A lexicon lookup missed
    #[error("Unknown lexicon category: {namespace}.{key}")]
    UnknownCategory {
        /// Category namespace, e.g. `person`
        namespace: String,
        /// Category key, e.g. `firstname`
        key: String,
    },

    /// A layout slot index past the end of the layout
    #[error("Slot index {index} out of bounds for layout of {len} slots")]
    SlotOutOfBounds {
        /// Requested slot index
        index: usize,
        /// Number of slots in the layout
        len: usize,
    },

    /// See [`ConfigError`]
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A lexicon file could not be read
    #[error("Failed to read lexicon from {path}")]
    LexiconIo {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Lexicon or configuration JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A batch worker thread panicked
    #[error("Batch worker {worker} panicked")]
    WorkerPanicked {
        /// Index of the worker that panicked
        worker: usize,
    },
}

impl FauxError {
    /// Create an empty pool error naming the pool
    pub fn empty_pool(what: impl Into<String>) -> Self {
        Self::EmptyPool { what: what.into() }
    }

    /// Create an unknown category error
    pub fn unknown_category(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownCategory {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FauxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FauxError::InvalidRange { lo: 5, hi: 1 };
        assert_eq!(
            error.to_string(),
            "Invalid range: lower bound 5 exceeds upper bound 1"
        );

        let error = FauxError::empty_pool("character pool");
        assert_eq!(error.to_string(), "Cannot draw from empty character pool");

        let error = FauxError::unknown_category("person", "nickname");
        assert_eq!(
            error.to_string(),
            "Unknown lexicon category: person.nickname"
        );

        let error = FauxError::SlotOutOfBounds { index: 2, len: 0 };
        assert_eq!(
            error.to_string(),
            "Slot index 2 out of bounds for layout of 0 slots"
        );

        let error = FauxError::WorkerPanicked { worker: 3 };
        assert_eq!(error.to_string(), "Batch worker 3 panicked");
    }

    #[test]
    fn test_lexicon_io_display_leaves_cause_to_source_chain() {
        use std::error::Error;

        let error = FauxError::LexiconIo {
            path: PathBuf::from("words.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "Failed to read lexicon from words.json");
        assert_eq!(error.source().unwrap().to_string(), "no such file");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let error: FauxError = ConfigError::InvalidThreads(0).into();
        assert_eq!(
            error.to_string(),
            ConfigError::InvalidThreads(0).to_string()
        );
    }
}
