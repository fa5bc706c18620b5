//! Search module for lore retrieval
//!
//! This module contains:
//! - `tokenizer`: lowercase/stopword tokenization shared by index and query
//! - `compress`: markup stripping for document bodies
//! - `index`: TF-IDF corpus index with ranked search

pub mod compress;
mod index;
pub mod tokenizer;

pub use compress::compress;
pub use index::{CorpusIndex, SearchHit, TITLE_PHRASE_BONUS, TITLE_WORD_BONUS};
pub use tokenizer::{is_stopword, tokenize};
