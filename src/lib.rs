//! Lorekeeper: grounded answers over a lore corpus
//!
//! Loads lore entries, ranks them against a question with TF-IDF plus title
//! bonuses, and assembles the system prompt that constrains a generator to
//! answer only from (and cite) those entries.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lorekeeper::{CorpusLoader, LoreConfig, RawRecord, Retriever, SharedCorpus};
//!
//! let corpus = CorpusLoader::new().load(vec![
//!     RawRecord::new("Stone Circle", "stone-circle", "Sites", "Ancient stones mark a boundary."),
//!     RawRecord::new("Iron Age", "iron-age", "History", "Iron tools changed everything."),
//! ]);
//! let shared = Arc::new(SharedCorpus::with_corpus(corpus));
//! let retriever = Retriever::new(shared, LoreConfig::default());
//!
//! let plan = retriever.build_prompt("Tell me about the stone circle").unwrap();
//! assert_eq!(plan.entries[0].title, "Stone Circle");
//! ```

pub mod types;

pub use types::*;

pub use lorekeeper_engine::{compress, tokenize};
pub use lorekeeper_search::{citations, prompt, CorpusLoader, Retriever, SharedCorpus};
