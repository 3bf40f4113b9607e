//! Write-boundary validation for question submissions.
//!
//! All invariants are enforced here, before a draft becomes a stored
//! [`Question`]. The filtering and assembly core assumes well-formed
//! stored data and never re-checks these.

use crate::canon;
use crate::error::{Error, Result};
use crate::types::{Question, QuestionDraft, QuestionId};
use chrono::Utc;

/// Minimum question text length after trimming.
const MIN_QUESTION_LEN: usize = 5;

/// Check a draft against every write-boundary invariant.
///
/// Rules: theme must be one of `allowed_themes`, question text at least
/// five characters after trimming, book in the 66-book canon, chapter
/// within the book's chapter count, both verses within the chapter's
/// verse count, and `verse_end >= verse_start`.
pub fn validate_draft(draft: &QuestionDraft, allowed_themes: &[String]) -> Result<()> {
    if !allowed_themes.iter().any(|t| t == &draft.theme) {
        return Err(Error::validation(
            "theme",
            format!("theme {:?} is not in the allowed theme list", draft.theme),
        ));
    }

    if draft.question.trim().chars().count() < MIN_QUESTION_LEN {
        return Err(Error::validation(
            "question",
            format!("question text must be at least {MIN_QUESTION_LEN} characters"),
        ));
    }

    let Some(canonical) = canon::normalize_book_name(&draft.book) else {
        return Err(Error::validation(
            "book",
            format!("{:?} is not a book of the Bible", draft.book),
        ));
    };

    let chapters = canon::chapter_count(canonical).unwrap_or(0);
    if draft.chapter == 0 || draft.chapter > chapters {
        return Err(Error::validation(
            "chapter",
            format!("{canonical} has {chapters} chapters, got chapter {}", draft.chapter),
        ));
    }

    if draft.verse_end < draft.verse_start {
        return Err(Error::validation(
            "verseEnd",
            format!(
                "verseEnd {} is before verseStart {}",
                draft.verse_end, draft.verse_start
            ),
        ));
    }

    let verses = canon::verse_count(canonical, draft.chapter).unwrap_or(0);
    if draft.verse_start == 0 || draft.verse_end > verses {
        return Err(Error::validation(
            "verseStart",
            format!(
                "{canonical} {} has {verses} verses, got range {}-{}",
                draft.chapter, draft.verse_start, draft.verse_end
            ),
        ));
    }

    Ok(())
}

/// Validate a draft and mint it into a stored [`Question`].
///
/// The new question gets a generated id, the canonical spelling of its
/// book name, a creation timestamp, and starts unapproved.
pub fn admit_draft(draft: QuestionDraft, allowed_themes: &[String]) -> Result<Question> {
    validate_draft(&draft, allowed_themes)?;

    // validate_draft already proved the book is canonical
    let book = canon::normalize_book_name(&draft.book)
        .map_or(draft.book, ToString::to_string);

    let question = Question {
        id: QuestionId::generate(),
        theme: draft.theme,
        question: draft.question.trim().to_string(),
        book,
        chapter: draft.chapter,
        verse_start: draft.verse_start,
        verse_end: draft.verse_end,
        is_approved: false,
        created_at: Utc::now(),
    };

    tracing::debug!(id = %question.id, book = %question.book, "admitted question draft");
    Ok(question)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn themes() -> Vec<String> {
        vec!["Creation".to_string(), "Faith".to_string()]
    }

    fn valid_draft() -> QuestionDraft {
        QuestionDraft {
            theme: "Creation".to_string(),
            question: "What was created on the first day?".to_string(),
            book: "Genesis".to_string(),
            chapter: 1,
            verse_start: 1,
            verse_end: 5,
        }
    }

    #[test]
    fn test_valid_draft_admitted_unapproved() {
        let q = admit_draft(valid_draft(), &themes()).unwrap();
        assert!(!q.is_approved);
        assert_eq!(q.book, "Genesis");
        assert!(!q.id.as_str().is_empty());
    }

    #[test]
    fn test_alias_book_stored_canonically() {
        let mut draft = valid_draft();
        draft.book = "gen".to_string();
        let q = admit_draft(draft, &themes()).unwrap();
        assert_eq!(q.book, "Genesis");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut draft = valid_draft();
        draft.theme = "Quantum Physics".to_string();
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "theme", .. }));
    }

    #[test]
    fn test_short_question_rejected() {
        let mut draft = valid_draft();
        draft.question = "  hi  ".to_string();
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "question", .. }));
    }

    #[test]
    fn test_unknown_book_rejected() {
        let mut draft = valid_draft();
        draft.book = "Hogwarts".to_string();
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "book", .. }));
    }

    #[test]
    fn test_chapter_out_of_range_rejected() {
        let mut draft = valid_draft();
        draft.chapter = 51; // Genesis has 50
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "chapter", .. }));
    }

    #[test]
    fn test_inverted_verse_range_rejected() {
        let mut draft = valid_draft();
        draft.verse_start = 7;
        draft.verse_end = 3;
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "verseEnd", .. }));
    }

    #[test]
    fn test_verse_beyond_chapter_rejected() {
        let mut draft = valid_draft();
        draft.verse_end = 32; // Genesis 1 has 31 verses
        let err = validate_draft(&draft, &themes()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "verseStart", .. }));
    }
}
