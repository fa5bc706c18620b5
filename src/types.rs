//! Public types for the Lorekeeper API.
//!
//! This module re-exports types from the internal crates with one flat
//! interface.

// ============================================================================
// Records and documents
// ============================================================================

pub use lorekeeper_core::{RawRecord, DEFAULT_CATEGORY};
pub use lorekeeper_engine::Document;

// ============================================================================
// Citations
// ============================================================================

pub use lorekeeper_core::{CitationEntry, CitationKey};
pub use lorekeeper_search::{Citation, CitationReport};

// ============================================================================
// Search and retrieval
// ============================================================================

pub use lorekeeper_engine::{CorpusIndex, SearchHit};
pub use lorekeeper_search::{GenerationOptions, PromptMode, PromptPlan};

// Corpus lifecycle and diagnostics
pub use lorekeeper_search::{Corpus, CorpusStats, LoadReport};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use lorekeeper_core::{GenerationConfig, LoreConfig, RetrievalConfig};
pub use lorekeeper_core::{ConfigError, LoreError, RecordError, Result};
