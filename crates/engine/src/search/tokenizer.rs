//! Text tokenizer for search operations
//!
//! Pipeline: lowercase → split on anything outside `a-z` → drop single letters
//!           → remove stopwords
//!
//! The same pipeline runs at index time and at query time. There is no
//! stemming: "stone" and "stones" are different terms.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Common English function words plus conversational filler that shows up
/// in questions ("tell me about", "what do you know").
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "it", "as", "was", "were", "are", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "this", "that", "these", "those", "i", "you", "he", "she", "we", "they", "me", "him", "her",
    "us", "them", "my", "your", "his", "its", "our", "their", "what", "which", "who", "whom",
    "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "such", "no", "not", "only", "same", "so", "than", "too", "very", "just",
    "about", "also", "then", "there", "here", "now", "up", "out", "into", "over", "after",
    "before", "between", "under", "again", "once", "tell", "know", "said", "says", "like",
    "well", "back", "even", "still", "way", "take", "come", "make", "go", "see",
];

static STOPWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check if a token is a stopword.
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Tokenize text into searchable terms.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Split into maximal runs of `a-z`
/// 3. Filter single-character tokens
/// 4. Remove stopwords
///
/// # Example
///
/// ```
/// use lorekeeper_engine::search::tokenizer::tokenize;
///
/// let tokens = tokenize("Tell me about the Stone Circles!");
/// assert_eq!(tokens, vec!["stone", "circles"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|s| s.len() > 1)
        .filter(|s| !is_stopword(s))
        .map(str::to_string)
        .collect()
}
