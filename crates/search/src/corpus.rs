//! Corpus loading
//!
//! Turns raw store rows into a fully built [`Corpus`]: a search index plus
//! the precomposed full-corpus prompt. Building is all-or-nothing; the
//! result is only visible to queries once it is published through
//! [`crate::SharedCorpus`].
//!
//! Records with empty content are skipped and counted, never fatal.

use lorekeeper_core::{LoreError, RawRecord, RetrievalConfig, Result, DEFAULT_CATEGORY};
use lorekeeper_engine::{CorpusIndex, Document};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::Read;

use crate::prompt::{self, PromptMode};

/// Outcome counters for one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Records turned into documents
    pub loaded: usize,
    /// Records rejected for empty content
    pub skipped_empty: usize,
}

/// Health snapshot of a loaded corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub entries: usize,
    pub corpus_size_chars: usize,
    pub approx_tokens: usize,
    pub rag_enabled: bool,
    pub rag_top_k: Option<usize>,
    pub generation: u64,
}

/// An immutable, fully built corpus
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    index: CorpusIndex,
    full_corpus_prompt: String,
    report: LoadReport,
    generation: u64,
}

impl Corpus {
    /// A corpus with no documents
    pub fn empty() -> Self {
        Self::from_index(CorpusIndex::new(), LoadReport::default())
    }

    /// Wrap an index, precomposing its full-corpus prompt
    pub fn from_index(index: CorpusIndex, report: LoadReport) -> Self {
        let full_corpus_prompt = prompt::render(PromptMode::FullCorpus, index.documents());
        Corpus {
            index,
            full_corpus_prompt,
            report,
            generation: 0,
        }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// System prompt containing every entry
    pub fn full_corpus_prompt(&self) -> &str {
        &self.full_corpus_prompt
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Publication counter, 0 until published
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Diagnostics for health reporting
    pub fn stats(&self, retrieval: &RetrievalConfig) -> CorpusStats {
        let chars = self.full_corpus_prompt.chars().count();
        CorpusStats {
            entries: self.len(),
            corpus_size_chars: chars,
            approx_tokens: chars / 4,
            rag_enabled: retrieval.use_rag,
            rag_top_k: retrieval.use_rag.then_some(retrieval.top_k),
            generation: self.generation,
        }
    }
}

/// Builds a [`Corpus`] from raw records
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusLoader {
    sort: bool,
}

impl CorpusLoader {
    /// Loader that keeps arrival order
    pub fn new() -> Self {
        Self::default()
    }

    /// Order records by (category, sort_order, title) before indexing
    ///
    /// Records without a sort order come after those with one.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Validate and index records
    pub fn load<I>(&self, records: I) -> Corpus
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut records: Vec<RawRecord> = records.into_iter().collect();
        if self.sort {
            records.sort_by(compare_records);
        }

        let mut index = CorpusIndex::new();
        let mut report = LoadReport::default();
        for record in records {
            match Document::from_record(record) {
                Ok(doc) => {
                    index.add_document(doc);
                    report.loaded += 1;
                }
                Err(e) => {
                    report.skipped_empty += 1;
                    tracing::warn!(target: "lorekeeper::corpus", error = %e, "Skipped empty entry");
                }
            }
        }

        let corpus = Corpus::from_index(index, report);
        let chars = corpus.full_corpus_prompt.chars().count();
        tracing::info!(
            target: "lorekeeper::corpus",
            loaded = report.loaded,
            skipped_empty = report.skipped_empty,
            corpus_size_chars = chars,
            approx_tokens = chars / 4,
            "Loaded lore entries"
        );
        corpus
    }

    /// Decode a JSON array of store rows and index it
    pub fn load_json(&self, json: &str) -> Result<Corpus> {
        let records: Vec<RawRecord> =
            serde_json::from_str(json).map_err(|e| LoreError::Load(e.to_string()))?;
        Ok(self.load(records))
    }

    /// Like [`load_json`](Self::load_json), reading from any source
    pub fn load_json_reader<R: Read>(&self, reader: R) -> Result<Corpus> {
        let records: Vec<RawRecord> = serde_json::from_reader(reader).map_err(decode_error)?;
        Ok(self.load(records))
    }
}

/// Reader failures stay I/O errors; everything else is a bad batch
fn decode_error(e: serde_json::Error) -> LoreError {
    if e.is_io() {
        LoreError::Io(e.into())
    } else {
        LoreError::Load(e.to_string())
    }
}

fn compare_records(a: &RawRecord, b: &RawRecord) -> Ordering {
    let category = |r: &RawRecord| r.category.clone().unwrap_or_else(|| DEFAULT_CATEGORY.into());
    category(a)
        .cmp(&category(b))
        .then_with(|| match (a.sort_order, b.sort_order) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.title.cmp(&b.title))
}
