//! Error types
//!
//! Search itself never fails. Errors surface only at the edges: when a raw
//! record is turned into a document, when configuration is read, and when a
//! caller asks for a prompt over a corpus that has nothing in it.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible Lorekeeper operations
pub type Result<T> = std::result::Result<T, LoreError>;

/// Rejection of a single raw record during corpus load
///
/// Loaders count these and move on; a bad record never aborts a load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record had no content after trimming
    #[error("record '{title}' has empty content")]
    EmptyContent {
        /// Title of the rejected record ("?" when the title was missing too)
        title: String,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::LoreConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum LoreError {
    /// A prompt was requested while no documents are loaded
    #[error("lore corpus not loaded")]
    EmptyCorpus,

    /// Configuration problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A batch of raw records could not be decoded
    #[error("failed to decode lore records: {0}")]
    Load(String),

    /// I/O failure while reading records
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
