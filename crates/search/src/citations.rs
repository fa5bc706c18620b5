//! Citation checks for generated answers
//!
//! Answers cite entries as `[[Category:slug|Title]]` and end with a
//! `[[Sources]]` ... `[[/Sources]]` block. These helpers pull the citations
//! back out and check each one against the loaded index, so an answer that
//! cites a document which does not exist can be flagged.

use lorekeeper_core::CitationKey;
use lorekeeper_engine::CorpusIndex;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Serialize;

const SOURCES_OPEN: &str = "[[Sources]]";
const SOURCES_CLOSE: &str = "[[/Sources]]";

static CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\[\]:|]+):([^\[\]|]+)\|([^\[\]]+)\]\]")
        .unwrap_or_else(|e| panic!("invalid citation pattern: {e}"))
});

/// One `[[Category:slug|Title]]` reference found in text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Citation {
    pub category: String,
    pub slug: String,
    pub title: String,
}

impl Citation {
    /// The key this citation claims to be
    pub fn key(&self) -> CitationKey {
        CitationKey::derive(&self.category, &self.slug, &self.title)
    }
}

/// Result of checking an answer's citations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CitationReport {
    /// Citations matching a loaded document
    pub valid: Vec<Citation>,
    /// Citations with no matching document
    pub unknown: Vec<Citation>,
    /// Whether the answer ends with a sources block
    pub has_sources_block: bool,
}

impl CitationReport {
    /// No invented citations and a sources block present
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.has_sources_block
    }
}

/// Distinct citations in order of first appearance
pub fn extract(text: &str) -> Vec<Citation> {
    let mut seen = FxHashSet::default();
    CITATION
        .captures_iter(text)
        .map(|caps| Citation {
            category: caps[1].to_string(),
            slug: caps[2].to_string(),
            title: caps[3].to_string(),
        })
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// Whether `[[Sources]]` is followed by `[[/Sources]]`
pub fn has_sources_block(text: &str) -> bool {
    match text.find(SOURCES_OPEN) {
        Some(start) => text[start + SOURCES_OPEN.len()..].contains(SOURCES_CLOSE),
        None => false,
    }
}

/// Split an answer's citations into known and invented ones
pub fn validate(index: &CorpusIndex, text: &str) -> CitationReport {
    let (valid, unknown) = extract(text)
        .into_iter()
        .partition(|c| index.contains_citation(&c.category, &c.slug, &c.title));
    CitationReport {
        valid,
        unknown,
        has_sources_block: has_sources_block(text),
    }
}
