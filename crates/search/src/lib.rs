//! Retrieval and prompt assembly for Lorekeeper.
//!
//! Sits on top of the pure index in `lorekeeper-engine`:
//!
//! - [`corpus`]: builds a [`Corpus`] from raw store rows
//! - [`shared`]: process-wide handle with atomic reload
//! - [`retrieval`]: picks documents for a question and renders the prompt
//! - [`prompt`]: entry rendering and the instructional framing
//! - [`citations`]: checks the citations in a generated answer

pub mod citations;
pub mod corpus;
pub mod prompt;
pub mod retrieval;
pub mod shared;

pub use citations::{Citation, CitationReport};
pub use corpus::{Corpus, CorpusLoader, CorpusStats, LoadReport};
pub use prompt::{PromptMode, ENTRY_SEPARATOR};
pub use retrieval::{GenerationOptions, PromptPlan, Retriever};
pub use shared::SharedCorpus;
