//! Question filtering against parsed references and theme selections.
//!
//! A question is kept when its theme is allowed AND its passage overlaps
//! at least one reference. Empty theme or reference lists are wildcards
//! for that dimension, never errors.

use crate::reference::ParsedReference;
use crate::types::Question;
use std::collections::HashMap;

/// Whether a question's passage matches a single parsed reference.
///
/// Book matching is case-insensitive substring containment against the
/// reference's book token, NOT exact equality. This is deliberate so
/// partially typed names still match; it also means "john" matches
/// "1 John", "2 John" and "3 John".
#[must_use]
pub fn matches_reference(question: &Question, reference: &ParsedReference) -> bool {
    if !question.book.to_lowercase().contains(&reference.book) {
        return false;
    }

    if let Some(chapter) = reference.chapter {
        if question.chapter != chapter {
            return false;
        }
    }

    match (reference.verse_start, reference.verse_end) {
        (Some(start), Some(end)) => {
            // Inclusive interval overlap: the question neither ends
            // before the reference starts nor starts after it ends
            question.verse_end >= start && question.verse_start <= end
        }
        // Chapter (or whole-book) granularity: book/chapter match suffices
        _ => true,
    }
}

/// Filter questions by parsed references and allowed themes.
///
/// Empty `refs` matches every passage; empty `themes` matches every
/// theme. `max_per_theme` caps each theme's result list, truncating to
/// the first N in storage order; `None` leaves results uncapped.
#[must_use]
pub fn filter_questions(
    questions: &[Question],
    refs: &[ParsedReference],
    themes: &[String],
    max_per_theme: Option<usize>,
) -> Vec<Question> {
    let mut per_theme: HashMap<String, usize> = HashMap::new();

    questions
        .iter()
        .filter(|q| themes.is_empty() || themes.iter().any(|t| t == &q.theme))
        .filter(|q| refs.is_empty() || refs.iter().any(|r| matches_reference(q, r)))
        .filter(|q| {
            let Some(cap) = max_per_theme else {
                return true;
            };
            let count = per_theme.entry(q.theme.clone()).or_insert(0);
            if *count >= cap {
                false
            } else {
                *count += 1;
                true
            }
        })
        .cloned()
        .collect()
}
