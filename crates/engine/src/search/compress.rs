//! Markup compression for prompt and index text
//!
//! Lore bodies are Markdown with inline HTML. Before a body is indexed or
//! placed in a prompt, formatting is stripped to save tokens. Rules run in a
//! fixed order; later rules assume earlier ones already ran:
//!
//! 1. `<!-- ... -->` comments removed
//! 2. `<sup>N</sup>` footnote markers removed
//! 3. `<br>` / `<br/>` turned into newlines
//! 4. Any other `<tag>` removed
//! 5. `**bold**` then `*italic*` unwrapped (non-greedy, no nesting)
//! 6. Leading `#` heading markers removed per line
//! 7. Runs of 3+ newlines collapsed to a blank line
//! 8. Trailing spaces/tabs removed per line
//! 9. Whole text trimmed
//!
//! Every rule only deletes or shortens text, so repeating the pass reaches a
//! fixed point. [`compress`] repeats it until the output stops changing,
//! which makes `compress(compress(x)) == compress(x)` hold for any input.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        // Patterns are literals below and covered by tests.
        pattern: Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid compress rule {pattern}: {e}")),
        replacement,
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(r"(?s)<!--.*?-->", ""),
        rule(r"<sup>\d+</sup>", ""),
        rule(r"<br\s*/?>", "\n"),
        rule(r"<[^>]+>", ""),
        rule(r"\*\*([^*]+)\*\*", "$1"),
        rule(r"\*([^*]+)\*", "$1"),
        rule(r"(?m)^#{1,6}\s*", ""),
        rule(r"\n{3,}", "\n\n"),
        rule(r"(?m)[ \t]+$", ""),
    ]
});

/// Single application of every rule, in order.
fn compress_pass(text: &str) -> String {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out.trim().to_string()
}

/// Strip formatting markup from a lore body.
///
/// # Example
///
/// ```
/// use lorekeeper_engine::search::compress::compress;
///
/// let body = "## The **Stone** Circle<sup>1</sup>\n\n\n\nIt stands.<br/>Still.";
/// assert_eq!(compress(body), "The Stone Circle\n\nIt stands.\nStill.");
/// ```
pub fn compress(text: &str) -> String {
    let mut current = compress_pass(text);
    loop {
        let next = compress_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
