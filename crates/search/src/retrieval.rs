//! Query handling
//!
//! Picks the documents for one question and renders the system prompt the
//! generator receives, together with the options it should run with.
//!
//! # Selection
//!
//! - RAG mode: top-K search; if nothing scores, the first
//!   `fallback_entries` documents in corpus order, so a question never goes
//!   out without context.
//! - Full-corpus mode: the precomposed prompt with every entry.
//!
//! An empty corpus is reported as [`LoreError::EmptyCorpus`]; the index
//! itself never errors.

use lorekeeper_core::{CitationEntry, GenerationConfig, LoreConfig, LoreError, Result};
use lorekeeper_engine::Document;
use serde::Serialize;
use std::sync::Arc;

use crate::corpus::Corpus;
use crate::prompt::{self, policy, PromptMode};
use crate::shared::SharedCorpus;

/// Characters of the query echoed into logs
const LOGGED_QUERY_CHARS: usize = 80;

/// Sampling options for the downstream generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOptions {
    /// Model the generator should run
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub num_predict: u32,
    /// Declared context window
    pub num_ctx: u32,
}

impl GenerationOptions {
    /// Options for `mode`, taking the context budget that mode declares
    pub fn for_mode(mode: PromptMode, generation: &GenerationConfig) -> Self {
        GenerationOptions {
            model: generation.model.clone(),
            temperature: generation.temperature,
            top_p: generation.top_p,
            num_predict: generation.num_predict,
            num_ctx: mode.context_size(generation),
        }
    }
}

/// Everything the chat layer needs to call the generator
#[derive(Debug, Clone, Serialize)]
pub struct PromptPlan {
    pub mode: PromptMode,
    pub system_prompt: String,
    /// Documents included, in prompt order
    pub entries: Vec<CitationEntry>,
    pub options: GenerationOptions,
    /// Generation of the corpus the prompt was built from
    pub corpus_generation: u64,
    /// Version of the instructional text in `system_prompt`
    pub policy_version: &'static str,
}

impl PromptPlan {
    pub fn approx_tokens(&self) -> usize {
        prompt::approx_tokens(&self.system_prompt)
    }
}

/// Builds prompts against the current shared corpus
#[derive(Debug, Clone)]
pub struct Retriever {
    corpus: Arc<SharedCorpus>,
    config: LoreConfig,
}

impl Retriever {
    pub fn new(corpus: Arc<SharedCorpus>, config: LoreConfig) -> Self {
        Retriever { corpus, config }
    }

    pub fn config(&self) -> &LoreConfig {
        &self.config
    }

    pub fn shared(&self) -> &Arc<SharedCorpus> {
        &self.corpus
    }

    /// Build the system prompt for `query`
    ///
    /// Uses one snapshot for the whole call, so a concurrent reload cannot
    /// mix documents from two corpora into one prompt.
    pub fn build_prompt(&self, query: &str) -> Result<PromptPlan> {
        let corpus = self.corpus.snapshot();
        if corpus.is_empty() {
            return Err(LoreError::EmptyCorpus);
        }

        let generation = &self.config.generation;
        if !self.config.retrieval.use_rag {
            return Ok(PromptPlan {
                mode: PromptMode::FullCorpus,
                system_prompt: corpus.full_corpus_prompt().to_string(),
                entries: corpus.index().citation_entries().collect(),
                options: GenerationOptions::for_mode(PromptMode::FullCorpus, generation),
                corpus_generation: corpus.generation(),
                policy_version: policy::POLICY_VERSION,
            });
        }

        let docs = self.select(&corpus, query);
        let system_prompt = prompt::render(PromptMode::TopK, docs.iter().copied());

        let titles: Vec<&str> = docs.iter().map(|d| d.title()).collect();
        let logged_query: String = query.chars().take(LOGGED_QUERY_CHARS).collect();
        tracing::info!(
            target: "lorekeeper::rag",
            query = %logged_query,
            entries = docs.len(),
            titles = ?titles,
            prompt_chars = system_prompt.len(),
            approx_tokens = prompt::approx_tokens(&system_prompt),
            "Built RAG prompt"
        );

        Ok(PromptPlan {
            mode: PromptMode::TopK,
            entries: docs.iter().map(|d| d.citation_entry()).collect(),
            system_prompt,
            options: GenerationOptions::for_mode(PromptMode::TopK, generation),
            corpus_generation: corpus.generation(),
            policy_version: policy::POLICY_VERSION,
        })
    }

    /// Documents for `query` in RAG mode, with the empty-result fallback
    pub fn select<'a>(&self, corpus: &'a Corpus, query: &str) -> Vec<&'a Document> {
        let retrieval = &self.config.retrieval;
        let hits = corpus.index().search(query, retrieval.top_k);
        if hits.is_empty() {
            tracing::debug!(
                target: "lorekeeper::rag",
                fallback = retrieval.fallback_entries,
                "No scored entries, using leading entries"
            );
            return corpus
                .index()
                .documents()
                .iter()
                .take(retrieval.fallback_entries)
                .collect();
        }
        hits.into_iter().map(|hit| hit.doc).collect()
    }
}
