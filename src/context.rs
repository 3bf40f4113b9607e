//! Book context resolution for assembled studies.
//!
//! Matches book metadata to the referenced books and produces narrative
//! context sentences, ordered to match the order references were entered.

use crate::reference::{parse_reference, ParsedReference};
use crate::types::Book;

/// Format a single context sentence for a book.
fn context_sentence(book: &Book) -> String {
    format!("{} is about {} The author is {}.", book.book, book.context, book.author)
}

/// Resolve context sentences for every book matched by the parsed
/// references.
///
/// `ordered_refs` is the deduplicated raw reference input, in entry
/// order; output follows the order each book's name first appears there.
/// Books matched by a reference but absent from `ordered_refs` (a
/// defensive fallback) are appended after the ordered ones,
/// alphabetically.
#[must_use]
pub fn resolve_context(
    books: &[Book],
    refs: &[ParsedReference],
    ordered_refs: &[String],
) -> Vec<String> {
    // Parse the ordered raw strings once; unparseable entries keep their
    // slot but can never claim a book.
    let ordered_tokens: Vec<Option<ParsedReference>> =
        ordered_refs.iter().map(|s| parse_reference(s)).collect();

    let mut ordered: Vec<(usize, &Book)> = Vec::new();
    let mut unordered: Vec<&Book> = Vec::new();

    for book in books {
        let name_lower = book.book.to_lowercase();
        if !refs.iter().any(|r| name_lower.contains(&r.book)) {
            continue;
        }

        let position = ordered_tokens
            .iter()
            .position(|t| t.as_ref().is_some_and(|r| name_lower.contains(&r.book)));

        match position {
            Some(pos) => ordered.push((pos, book)),
            None => unordered.push(book),
        }
    }

    ordered.sort_by_key(|(pos, _)| *pos);
    unordered.sort_by(|a, b| a.book.cmp(&b.book));

    ordered
        .into_iter()
        .map(|(_, b)| b)
        .chain(unordered)
        .map(context_sentence)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::reference::parse_references;

    fn make_book(index: u32, name: &str, author: &str, context: &str) -> Book {
        Book {
            index,
            book: name.to_string(),
            author: author.to_string(),
            context: context.to_string(),
        }
    }

    fn sample_books() -> Vec<Book> {
        vec![
            make_book(2, "Exodus", "Moses", "the deliverance of Israel from Egypt."),
            make_book(1, "Genesis", "Moses", "the beginnings of the world."),
            make_book(43, "John", "John the Apostle", "the divinity of Christ."),
        ]
    }

    #[test]
    fn test_sentence_format() {
        let book = make_book(1, "Genesis", "Moses", "the beginnings of the world.");
        assert_eq!(
            context_sentence(&book),
            "Genesis is about the beginnings of the world. The author is Moses."
        );
    }

    #[test]
    fn test_order_follows_reference_entry_order() {
        let books = sample_books();
        let raw = vec!["Genesis 1".to_string(), "Exodus 2".to_string()];
        let refs = parse_references(&raw);

        let sentences = resolve_context(&books, &refs, &raw);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("Genesis"));
        assert!(sentences[1].starts_with("Exodus"));
    }

    #[test]
    fn test_unreferenced_books_excluded() {
        let books = sample_books();
        let raw = vec!["John 3:16".to_string()];
        let refs = parse_references(&raw);

        let sentences = resolve_context(&books, &refs, &raw);
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("John"));
    }

    #[test]
    fn test_books_missing_from_order_append_alphabetically() {
        let books = sample_books();
        // Matched by refs, but the ordered raw list only names John
        let refs = parse_references(&["Genesis 1", "Exodus 2", "John 3"]);
        let raw = vec!["John 3".to_string()];

        let sentences = resolve_context(&books, &refs, &raw);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].starts_with("John"));
        assert!(sentences[1].starts_with("Exodus"));
        assert!(sentences[2].starts_with("Genesis"));
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let books = sample_books();
        let refs = parse_references(&["Malachi 1"]);
        let sentences = resolve_context(&books, &refs, &["Malachi 1".to_string()]);
        assert!(sentences.is_empty());
    }
}
