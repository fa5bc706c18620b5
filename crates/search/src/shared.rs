//! Shared corpus with atomic replacement
//!
//! Queries take a snapshot (`Arc<Corpus>`) and work on it without holding any
//! lock. A reload builds a complete new [`Corpus`] first and then swaps the
//! pointer in one step, so a query sees either the old corpus or the new one,
//! never a mix.
//!
//! # Thread Safety
//!
//! The lock only guards the pointer swap and the `Arc` clone. Searching,
//! rendering and index building all happen outside it.

use lorekeeper_core::RawRecord;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::corpus::{Corpus, CorpusLoader};

/// Process-wide handle to the current corpus
#[derive(Debug)]
pub struct SharedCorpus {
    current: RwLock<Arc<Corpus>>,
    /// Version watermark, incremented on every publish
    generation: AtomicU64,
}

impl Default for SharedCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCorpus {
    /// Start with an empty corpus (generation 0)
    pub fn new() -> Self {
        SharedCorpus {
            current: RwLock::new(Arc::new(Corpus::empty())),
            generation: AtomicU64::new(0),
        }
    }

    /// Start with an already built corpus (generation 1)
    pub fn with_corpus(corpus: Corpus) -> Self {
        let shared = Self::new();
        shared.publish(corpus);
        shared
    }

    /// The corpus queries should use right now
    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.current.read())
    }

    /// Number of corpora published so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Replace the current corpus, returning the one it superseded
    ///
    /// Snapshots taken before the swap keep the old corpus alive until they
    /// are dropped.
    pub fn publish(&self, corpus: Corpus) -> Arc<Corpus> {
        let (_, previous) = self.swap_in(corpus);
        previous
    }

    /// Build a corpus from `records` off to the side, then publish it
    ///
    /// Returns the newly published corpus.
    pub fn reload<I>(&self, loader: &CorpusLoader, records: I) -> Arc<Corpus>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let corpus = loader.load(records);
        let (next, _) = self.swap_in(corpus);
        next
    }

    /// Swap in `corpus`; returns (new, previous)
    fn swap_in(&self, corpus: Corpus) -> (Arc<Corpus>, Arc<Corpus>) {
        let mut current = self.current.write();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let next = Arc::new(corpus.with_generation(generation));
        let previous = std::mem::replace(&mut *current, Arc::clone(&next));
        drop(current);

        tracing::info!(
            target: "lorekeeper::shared",
            generation,
            entries = next.len(),
            "Published lore corpus"
        );
        (next, previous)
    }
}
