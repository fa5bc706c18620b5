//! Raw lore records
//!
//! Rows arrive from the document store as loosely typed JSON. Every field is
//! optional here; validation happens once, when the engine turns a record
//! into a document.

use serde::{Deserialize, Serialize};

/// Category assigned to records that arrive without one
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One row of the `lore_items` table
///
/// Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Display title
    pub title: Option<String>,
    /// URL slug, unique within the category
    pub slug: Option<String>,
    /// Category name
    pub category: Option<String>,
    /// Author credit
    pub author: Option<String>,
    /// Free-form date
    pub date: Option<String>,
    /// Markdown/HTML body
    pub content: Option<String>,
    /// Position within the category
    pub sort_order: Option<i64>,
}

impl RawRecord {
    /// Create a record with the fields every lore entry carries
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        RawRecord {
            title: Some(title.into()),
            slug: Some(slug.into()),
            category: Some(category.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Title for log lines, `?` when missing
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("?")
    }

    /// Trimmed content, `None` if missing or blank
    pub fn trimmed_content(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
