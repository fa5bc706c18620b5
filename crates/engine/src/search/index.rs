//! In-memory TF-IDF index over lore documents
//!
//! This module provides:
//! - CorpusIndex holding documents in arrival order
//! - Corpus-wide document frequencies
//! - Ranked top-K search with title bonuses
//!
//! # Scoring
//!
//! For each query token `t` present in a document:
//!
//! ```text
//! score += (1 + ln(tf)) * ln(N / df)
//! ```
//!
//! `df` is clamped to at least 1. On top of the term score a document gets
//! +10 when the whole lowercased query is a substring of its title, and +3
//! per whitespace-separated word shared between query and title.
//!
//! # Lifecycle
//!
//! An index is built with `add_document` and then only read. Sharing it
//! between threads happens behind an `Arc`; a reload builds a new index and
//! replaces the old one instead of mutating it.

use lorekeeper_core::CitationEntry;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

use super::tokenizer::tokenize;
use crate::document::Document;

/// Bonus when the full query appears in the title
pub const TITLE_PHRASE_BONUS: f64 = 10.0;

/// Bonus per query word that is also a title word
pub const TITLE_WORD_BONUS: f64 = 3.0;

// ============================================================================
// SearchHit
// ============================================================================

/// A scored document
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    /// Relevance score (0.0 for unscored fallback hits)
    pub score: f64,
    /// The matched document
    pub doc: &'a Document,
}

// ============================================================================
// CorpusIndex
// ============================================================================

/// Document store plus the statistics TF-IDF needs
///
/// # Invariants
///
/// - `doc_freqs[t]` is the number of documents whose terms include `t`
/// - `total_docs == docs.len()`
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    /// Documents in arrival order
    docs: Vec<Document>,

    /// Term -> number of documents containing it
    doc_freqs: FxHashMap<String, usize>,

    /// Total documents indexed
    total_docs: usize,
}

impl CorpusIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from documents, preserving their order
    pub fn from_documents<I>(docs: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let mut index = Self::new();
        for doc in docs {
            index.add_document(doc);
        }
        index
    }

    /// Remove every document and statistic
    pub fn clear(&mut self) {
        self.docs.clear();
        self.doc_freqs.clear();
        self.total_docs = 0;
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Append a document
    ///
    /// Each distinct term bumps its document frequency by one, regardless of
    /// how often it occurs in the document.
    pub fn add_document(&mut self, doc: Document) {
        for term in doc.terms() {
            match self.doc_freqs.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.doc_freqs.insert(term.to_string(), 1);
                }
            }
        }
        self.docs.push(doc);
        self.total_docs = self.docs.len();
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Get total number of indexed documents
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Get document frequency for a term (0 if never indexed)
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// Compute IDF for a term
    ///
    /// IDF(t) = ln(N / max(df, 1)); 0.0 on an empty index.
    pub fn compute_idf(&self, term: &str) -> f64 {
        if self.total_docs == 0 {
            return 0.0;
        }
        let df = self.doc_freq(term).max(1) as f64;
        (self.total_docs as f64 / df).ln()
    }

    /// Documents in corpus order
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, position: usize) -> Option<&Document> {
        self.docs.get(position)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// `(category, slug, title)` of every document, in corpus order
    pub fn citation_entries(&self) -> impl Iterator<Item = CitationEntry> + '_ {
        self.docs.iter().map(Document::citation_entry)
    }

    /// Whether a document with exactly this identity is loaded
    pub fn contains_citation(&self, category: &str, slug: &str, title: &str) -> bool {
        self.docs
            .iter()
            .any(|d| d.category() == category && d.slug() == slug && d.title() == title)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// First `n` documents in corpus order, unscored
    pub fn head(&self, n: usize) -> Vec<SearchHit<'_>> {
        self.docs
            .iter()
            .take(n)
            .map(|doc| SearchHit { score: 0.0, doc })
            .collect()
    }

    /// Rank documents against a free-text query
    ///
    /// Returns at most `top_k` hits with positive scores, best first; equal
    /// scores keep corpus order. A query with no searchable tokens returns
    /// the first `top_k` documents instead.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit<'_>> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            tracing::debug!(
                target: "lorekeeper::search",
                top_k,
                "No searchable tokens, returning leading documents"
            );
            return self.head(top_k);
        }

        // IDF depends only on the term, so resolve it once per query token
        let weighted: Vec<(&str, f64)> = query_tokens
            .iter()
            .map(|t| (t.as_str(), self.compute_idf(t)))
            .collect();
        let query_lower = query.to_lowercase();
        let query_words: FxHashSet<&str> = query_lower.split_whitespace().collect();

        let mut hits: Vec<SearchHit<'_>> = self
            .docs
            .iter()
            .map(|doc| SearchHit {
                score: score_document(doc, &weighted, &query_lower, &query_words),
                doc,
            })
            .collect();

        // sort_by is stable: ties stay in corpus order
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);
        hits.retain(|hit| hit.score > 0.0);

        tracing::debug!(
            target: "lorekeeper::search",
            tokens = query_tokens.len(),
            total_docs = self.total_docs,
            hits = hits.len(),
            best = hits.first().map_or(0.0, |h| h.score),
            "Ranked documents"
        );
        hits
    }
}

/// Term score plus title bonuses for one document
fn score_document(
    doc: &Document,
    weighted_terms: &[(&str, f64)],
    query_lower: &str,
    query_words: &FxHashSet<&str>,
) -> f64 {
    let mut score = 0.0;
    for (term, idf) in weighted_terms {
        let tf = doc.term_frequency(term);
        if tf > 0 {
            score += (1.0 + (tf as f64).ln()) * idf;
        }
    }

    let title_lower = doc.title().to_lowercase();
    if title_lower.contains(query_lower) {
        score += TITLE_PHRASE_BONUS;
    }

    let title_words: FxHashSet<&str> = title_lower.split_whitespace().collect();
    let overlap = query_words.intersection(&title_words).count();
    score += overlap as f64 * TITLE_WORD_BONUS;

    score
}

// ============================================================================
// Tests
// ============================================================================
