//! Study assembly: grouping caller-selected questions into the final
//! study document structure.
//!
//! The assembler only groups what it is given. Selection is always the
//! caller's responsibility; there is no implicit "select all approved".

use crate::reference::{parse_reference, ParsedReference};
use crate::types::Question;
use serde::{Deserialize, Serialize};

/// Questions for one theme within a book group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeGroup {
    /// Theme tag.
    pub theme: String,
    /// Question texts under this theme, in selection order.
    pub questions: Vec<String>,
}

/// Questions for one book, grouped by theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookGroup {
    /// Book name as stored on the questions.
    pub book: String,
    /// Theme groups in first-seen order.
    pub themes: Vec<ThemeGroup>,
}

/// The assembled study presented to the end user for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDocument {
    /// Reference strings as entered, deduplicated.
    pub ref_arr: Vec<String>,
    /// Themes that yielded at least one question, in first-seen order.
    pub theme_arr: Vec<String>,
    /// Book context sentences, ordered to match `ref_arr`.
    pub context_arr: Vec<String>,
    /// Questions grouped by book then theme.
    pub groups: Vec<BookGroup>,
}

impl StudyDocument {
    /// Whether the study contains no questions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of question texts across all groups.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|b| &b.themes)
            .map(|t| t.questions.len())
            .sum()
    }
}

/// Group selected questions by book then theme into a [`StudyDocument`].
///
/// Book group order follows the order each book first appears among the
/// parsed `ref_arr` tokens (substring match against the stored book
/// name), with alphabetical fallback for books not found there. This
/// mirrors the context resolver's ordering so the context list and the
/// question grouping stay consistent. An empty selection yields a valid
/// document with empty groupings.
#[must_use]
pub fn assemble_study(
    selected: &[Question],
    ref_arr: &[String],
    context_arr: &[String],
) -> StudyDocument {
    let mut groups: Vec<BookGroup> = Vec::new();
    let mut theme_arr: Vec<String> = Vec::new();

    for question in selected {
        if !theme_arr.contains(&question.theme) {
            theme_arr.push(question.theme.clone());
        }

        let book_pos = match groups.iter().position(|g| g.book == question.book) {
            Some(p) => p,
            None => {
                groups.push(BookGroup { book: question.book.clone(), themes: Vec::new() });
                groups.len() - 1
            }
        };
        let book_group = &mut groups[book_pos];

        match book_group.themes.iter_mut().find(|t| t.theme == question.theme) {
            Some(t) => t.questions.push(question.question.clone()),
            None => book_group.themes.push(ThemeGroup {
                theme: question.theme.clone(),
                questions: vec![question.question.clone()],
            }),
        }
    }

    let ordered_tokens: Vec<Option<ParsedReference>> =
        ref_arr.iter().map(|s| parse_reference(s)).collect();

    groups.sort_by(|a, b| {
        let pos = |g: &BookGroup| {
            let name_lower = g.book.to_lowercase();
            ordered_tokens
                .iter()
                .position(|t| t.as_ref().is_some_and(|r| name_lower.contains(&r.book)))
        };
        match (pos(a), pos(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.book.cmp(&b.book),
        }
    });

    StudyDocument {
        ref_arr: ref_arr.to_vec(),
        theme_arr,
        context_arr: context_arr.to_vec(),
        groups,
    }
}
