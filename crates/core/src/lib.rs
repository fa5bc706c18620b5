//! Core types for Lorekeeper
//!
//! This crate defines the vocabulary shared by the engine and the
//! orchestration layer:
//! - [`RawRecord`]: an untyped row as delivered by the document store
//! - [`CitationKey`] / [`CitationEntry`]: the only way to name a source document
//! - [`LoreConfig`]: retrieval and generation settings
//! - Error types for record validation, configuration and corpus access

pub mod citation;
pub mod config;
pub mod error;
pub mod record;

pub use citation::{CitationEntry, CitationKey};
pub use config::{GenerationConfig, LoreConfig, RetrievalConfig};
pub use error::{ConfigError, LoreError, RecordError, Result};
pub use record::{RawRecord, DEFAULT_CATEGORY};
