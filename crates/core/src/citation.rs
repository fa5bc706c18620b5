//! Citation keys
//!
//! A citation key ties a generated answer back to one source document. It is
//! rendered as `[[category:slug|title]]` and can only be produced by
//! [`CitationKey::derive`], so every key in a prompt names a real document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic citation key `[[category:slug|title]]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitationKey(String);

impl CitationKey {
    /// Derive the key for a document
    pub fn derive(category: &str, slug: &str, title: &str) -> Self {
        CitationKey(format!("[[{}:{}|{}]]", category, slug, title))
    }

    /// The rendered key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CitationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CitationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Read-only identity of a loaded document, for citation checks
///
/// `key` is the short `category:slug` form used by diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitationEntry {
    /// `category:slug`
    pub key: String,
    /// Document category
    pub category: String,
    /// Slug, unique within the category
    pub slug: String,
    /// Document title
    pub title: String,
}

impl CitationEntry {
    /// Build an entry from the identifying triple
    pub fn new(category: &str, slug: &str, title: &str) -> Self {
        CitationEntry {
            key: format!("{}:{}", category, slug),
            category: category.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
        }
    }

    /// The full citation key for this entry
    pub fn citation_key(&self) -> CitationKey {
        CitationKey::derive(&self.category, &self.slug, &self.title)
    }
}
