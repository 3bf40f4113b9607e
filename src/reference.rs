//! Free-text scripture reference parsing.
//!
//! Turns strings like `"Genesis 1:1-3"`, `"1 John 2"` or `"Exodus"` into
//! structured [`ParsedReference`] values. Parsing never fails loudly:
//! malformed input yields `None` and callers drop it, so one bad entry
//! degrades to "no match" instead of failing a whole search.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching `[1 ]Book[ chapter[:start[-end]]]`.
///
/// Group 1: optional leading numeral ("1 John"). Group 2: book words.
/// Group 3: chapter. Groups 4/5: verse range.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d)?\s*([A-Za-z]+(?:\s+[A-Za-z]+)*)\s*(\d+)?\s*(?::\s*(\d+)\s*(?:-\s*(\d+))?)?\s*$")
        .expect("valid regex: RE_REFERENCE")
});

/// A scripture reference parsed from user input.
///
/// Ephemeral: exists only for the duration of one filter/search
/// operation, never persisted. The book token is lowercased and trimmed
/// for case-insensitive matching downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Lowercased, trimmed book token (may be a partial name).
    pub book: String,
    /// Chapter number; `None` means the reference covers the whole book.
    pub chapter: Option<u32>,
    /// First verse; `None` means chapter granularity.
    pub verse_start: Option<u32>,
    /// Last verse; equals `verse_start` when no range was given.
    pub verse_end: Option<u32>,
}

impl ParsedReference {
    /// Build a whole-book reference from a book token.
    #[must_use]
    pub fn book_only(book: impl Into<String>) -> Self {
        Self {
            book: book.into().trim().to_lowercase(),
            chapter: None,
            verse_start: None,
            verse_end: None,
        }
    }
}

/// Parse a single free-text scripture reference.
///
/// Recognizes an optional leading numeral (for books like "1 John"), one
/// or more word tokens for the book name, an optional chapter, and an
/// optional `:start-end` verse range (end defaults to start). Returns
/// `None` when the text matches none of these shapes.
pub fn parse_reference(text: &str) -> Option<ParsedReference> {
    let caps = RE_REFERENCE.captures(text)?;

    let words = caps.get(2)?.as_str().trim();
    if words.is_empty() {
        return None;
    }

    let book = match caps.get(1) {
        Some(numeral) => format!("{} {}", numeral.as_str(), words).to_lowercase(),
        None => words.to_lowercase(),
    };

    let chapter = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok());
    let verse_start = caps.get(4).and_then(|m| m.as_str().parse::<u32>().ok());
    let verse_end = caps
        .get(5)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .or(verse_start);

    Some(ParsedReference { book, chapter, verse_start, verse_end })
}

/// Parse a batch of reference strings, silently dropping entries that
/// fail to parse.
pub fn parse_references<S: AsRef<str>>(texts: &[S]) -> Vec<ParsedReference> {
    texts
        .iter()
        .filter_map(|t| parse_reference(t.as_ref()))
        .collect()
}

/// Deduplicate raw reference strings, preserving first-seen order.
///
/// The context resolver and study assembler order their output by the
/// first appearance of each reference as entered.
pub fn dedup_references<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    texts
        .iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .collect()
}
