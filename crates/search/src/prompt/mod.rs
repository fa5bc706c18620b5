//! Prompt assembly
//!
//! Turns a list of documents into the system prompt handed to the generator.
//! Rendering is a pure function of (mode, documents); the instructional text
//! lives in [`policy`] and never influences which documents are chosen.
//!
//! Each document renders as:
//!
//! ```text
//! ENTRY: {title}
//! Citation key: [[{category}:{slug}|{title}]]
//! Author: {author}          (only if present)
//! Date: {date}              (only if present)
//! Category: {category}
//!
//! {compressed body}
//! ```
//!
//! Records are joined with [`ENTRY_SEPARATOR`].

pub mod policy;

use lorekeeper_core::GenerationConfig;
use lorekeeper_engine::Document;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Separator between rendered entries
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Which framing a prompt uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    /// Every loaded entry, larger context budget
    FullCorpus,
    /// Search results for one question, smaller context budget
    TopK,
}

impl PromptMode {
    /// Context window to declare to the generator for this mode
    pub fn context_size(self, generation: &GenerationConfig) -> u32 {
        match self {
            PromptMode::FullCorpus => generation.full_corpus_context,
            PromptMode::TopK => generation.top_k_context,
        }
    }

    fn frame(self) -> (&'static str, &'static str) {
        match self {
            PromptMode::FullCorpus => (policy::FULL_CORPUS_OPEN, policy::FULL_CORPUS_CLOSE),
            PromptMode::TopK => (policy::TOP_K_OPEN, policy::TOP_K_CLOSE),
        }
    }
}

/// Render one document as a prompt record
pub fn render_entry(doc: &Document) -> String {
    let mut block = String::with_capacity(doc.compressed().len() + 128);
    // Writing into a String cannot fail
    let _ = writeln!(block, "ENTRY: {}", doc.title());
    let _ = writeln!(block, "Citation key: {}", doc.citation_key());
    if let Some(author) = doc.author() {
        let _ = writeln!(block, "Author: {}", author);
    }
    if let Some(date) = doc.date() {
        let _ = writeln!(block, "Date: {}", date);
    }
    let _ = writeln!(block, "Category: {}", doc.category());
    block.push('\n');
    block.push_str(doc.compressed());
    block
}

/// Render documents in order, joined by [`ENTRY_SEPARATOR`]
pub fn render_entries<'a, I>(docs: I) -> String
where
    I: IntoIterator<Item = &'a Document>,
{
    docs.into_iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Wrap an already rendered entry block in the framing for `mode`
pub fn frame(mode: PromptMode, entries: &str) -> String {
    let (open, close) = mode.frame();
    let mut prompt = String::with_capacity(
        policy::SYSTEM_PROMPT_BASE.len() + open.len() + entries.len() + close.len(),
    );
    prompt.push_str(policy::SYSTEM_PROMPT_BASE);
    prompt.push_str(open);
    prompt.push_str(entries);
    prompt.push_str(close);
    prompt
}

/// Full system prompt for `mode` over `docs`
pub fn render<'a, I>(mode: PromptMode, docs: I) -> String
where
    I: IntoIterator<Item = &'a Document>,
{
    frame(mode, &render_entries(docs))
}

/// Rough token estimate used in logs and diagnostics
pub fn approx_tokens(text: &str) -> usize {
    text.len() / 4
}
