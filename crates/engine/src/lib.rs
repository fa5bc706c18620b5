//! Lorekeeper search engine
//!
//! Pure, in-memory text search over lore entries: tokenization, markup
//! compression, and a TF-IDF index. Nothing here performs I/O; callers hand
//! in records and get ranked documents back.

pub mod document;
pub mod search;

pub use document::Document;
pub use search::{compress, tokenize, CorpusIndex, SearchHit};
