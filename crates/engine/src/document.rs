//! Indexed lore documents
//!
//! A [`Document`] is built once from a [`RawRecord`] and never changes. All
//! derived data (compressed body, citation key, term counts) is computed at
//! construction so the index only ever reads it.

use lorekeeper_core::{CitationEntry, CitationKey, RawRecord, RecordError, DEFAULT_CATEGORY};
use rustc_hash::FxHashMap;

use crate::search::compress::compress;
use crate::search::tokenizer::tokenize;

/// Times the title is repeated in the indexed text
const TITLE_WEIGHT: usize = 3;

/// A validated, immutable lore entry
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    slug: String,
    category: String,
    author: Option<String>,
    date: Option<String>,
    content: String,
    compressed: String,
    citation_key: CitationKey,
    /// term -> occurrences in the weighted search text
    term_counts: FxHashMap<String, u32>,
}

impl Document {
    /// Validate a raw record and build its document.
    ///
    /// Content is the only required field. Missing title/slug become empty
    /// strings, a missing category becomes [`DEFAULT_CATEGORY`], and blank
    /// author/date are treated as absent.
    pub fn from_record(record: RawRecord) -> Result<Self, RecordError> {
        let content = match record.trimmed_content() {
            Some(c) => c.to_string(),
            None => {
                return Err(RecordError::EmptyContent {
                    title: record.display_title().to_string(),
                })
            }
        };

        let RawRecord {
            title,
            slug,
            category,
            author,
            date,
            ..
        } = record;

        Ok(Self::build(
            title.unwrap_or_default(),
            slug.unwrap_or_default(),
            category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            non_blank(author),
            non_blank(date),
            content,
        ))
    }

    fn build(
        title: String,
        slug: String,
        category: String,
        author: Option<String>,
        date: Option<String>,
        content: String,
    ) -> Self {
        let compressed = compress(&content);
        let citation_key = CitationKey::derive(&category, &slug, &title);

        let mut search_text = String::with_capacity(
            title.len() * TITLE_WEIGHT + category.len() + compressed.len() + 16,
        );
        for _ in 0..TITLE_WEIGHT {
            search_text.push_str(&title);
            search_text.push(' ');
        }
        search_text.push_str(&category);
        search_text.push(' ');
        search_text.push_str(author.as_deref().unwrap_or(""));
        search_text.push(' ');
        search_text.push_str(&compressed);

        let mut term_counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokenize(&search_text) {
            *term_counts.entry(token).or_insert(0) += 1;
        }

        Document {
            title,
            slug,
            category,
            author,
            date,
            content,
            compressed,
            citation_key,
            term_counts,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Original body as loaded (trimmed)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Markup-stripped body used in prompts
    pub fn compressed(&self) -> &str {
        &self.compressed
    }

    pub fn citation_key(&self) -> &CitationKey {
        &self.citation_key
    }

    /// Identity triple for citation checks
    pub fn citation_entry(&self) -> CitationEntry {
        CitationEntry::new(&self.category, &self.slug, &self.title)
    }

    /// Occurrences of `term` in this document's indexed text
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Distinct indexed terms
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.term_counts.len()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
