//! Canonical ordering of question lists.
//!
//! Used wherever question lists are displayed or exported, so that rows
//! always appear in Bible order regardless of storage order.

use crate::canon;
use crate::types::Question;

/// Sort key: canonical book index (unknown books last), then chapter,
/// then starting verse.
fn sort_key(question: &Question) -> (u32, u32, u32) {
    let index = canon::book_index(&question.book).unwrap_or(u32::MAX);
    (index, question.chapter, question.verse_start)
}

/// Sort questions by canonical book order, then chapter, then starting
/// verse. Pure and non-mutating; the sort is stable, so questions with
/// identical keys keep their relative input order (repeated re-renders
/// after partial edits must not visually reorder unaffected rows).
#[must_use]
pub fn sort_by_canonical_order(questions: &[Question]) -> Vec<Question> {
    let mut sorted = questions.to_vec();
    sorted.sort_by_key(sort_key);
    sorted
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::QuestionId;
    use chrono::Utc;

    fn make_question(id: &str, book: &str, chapter: u32, verse: u32) -> Question {
        Question {
            id: QuestionId::new(id),
            theme: "Faith".to_string(),
            question: "Sample question text?".to_string(),
            book: book.to_string(),
            chapter,
            verse_start: verse,
            verse_end: verse,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sorts_by_canonical_book_order() {
        let questions = vec![
            make_question("a", "Revelation", 1, 1),
            make_question("b", "Genesis", 1, 1),
            make_question("c", "John", 3, 16),
        ];
        let sorted = sort_by_canonical_order(&questions);
        let books: Vec<&str> = sorted.iter().map(|q| q.book.as_str()).collect();
        assert_eq!(books, vec!["Genesis", "John", "Revelation"]);
    }

    #[test]
    fn test_sorts_within_book_by_chapter_then_verse() {
        let questions = vec![
            make_question("a", "Genesis", 2, 1),
            make_question("b", "Genesis", 1, 26),
            make_question("c", "Genesis", 1, 3),
        ];
        let sorted = sort_by_canonical_order(&questions);
        let keys: Vec<(u32, u32)> = sorted.iter().map(|q| (q.chapter, q.verse_start)).collect();
        assert_eq!(keys, vec![(1, 3), (1, 26), (2, 1)]);
    }

    #[test]
    fn test_unknown_books_sort_last() {
        let questions = vec![
            make_question("a", "Apocrypha", 1, 1),
            make_question("b", "Genesis", 1, 1),
        ];
        let sorted = sort_by_canonical_order(&questions);
        assert_eq!(sorted[0].book, "Genesis");
        assert_eq!(sorted[1].book, "Apocrypha");
    }

    #[test]
    fn test_stable_for_identical_keys() {
        let questions = vec![
            make_question("first", "Genesis", 1, 1),
            make_question("second", "Genesis", 1, 1),
            make_question("third", "Genesis", 1, 1),
        ];
        let sorted = sort_by_canonical_order(&questions);
        let ids: Vec<&str> = sorted.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let questions = vec![
            make_question("a", "Revelation", 1, 1),
            make_question("b", "Genesis", 1, 1),
        ];
        let _sorted = sort_by_canonical_order(&questions);
        assert_eq!(questions[0].book, "Revelation");
    }
}
