//! End-to-end study preparation flow.
//!
//! Two phases, matching how end users work: first a search over the
//! approved set (references + themes → candidate questions and book
//! context), then assembly of the subset the user actually selected.

use crate::bank::QuestionBank;
use crate::context::resolve_context;
use crate::filter::filter_questions;
use crate::reference::{dedup_references, parse_references};
use crate::sort::sort_by_canonical_order;
use crate::study::{assemble_study, StudyDocument};
use crate::types::{Question, QuestionId};

/// Candidate questions and context produced by the search phase.
///
/// Holds everything the presentation layer needs to show results and
/// everything the assembly phase needs afterwards.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Deduplicated reference strings as entered.
    pub ref_arr: Vec<String>,
    /// Book context sentences ordered to match `ref_arr`.
    pub context_arr: Vec<String>,
    /// Matching approved questions in canonical order.
    pub candidates: Vec<Question>,
}

/// Runs reference parsing, filtering, context resolution and assembly
/// over an injected [`QuestionBank`].
#[derive(Debug, Clone, Default)]
pub struct StudyService {
    /// Cap on questions per theme during filtering; `None` is uncapped.
    pub max_per_theme: Option<usize>,
}

impl StudyService {
    /// Create a service with no per-theme cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that caps each theme's results at `cap`.
    #[must_use]
    pub const fn with_cap(cap: usize) -> Self {
        Self { max_per_theme: Some(cap) }
    }

    /// Search the approved set by raw reference strings and themes.
    ///
    /// Unparseable references are silently dropped; empty reference or
    /// theme lists are wildcards. Zero matches is a normal outcome, not
    /// an error — the caller renders an empty state.
    #[must_use]
    pub fn search(
        &self,
        bank: &QuestionBank,
        raw_refs: &[String],
        themes: &[String],
    ) -> SearchResults {
        let ref_arr = dedup_references(raw_refs);
        let refs = parse_references(&ref_arr);

        let approved = bank.approved_questions();
        let matched = filter_questions(&approved, &refs, themes, self.max_per_theme);
        let candidates = sort_by_canonical_order(&matched);

        let context_arr = resolve_context(bank.books(), &refs, &ref_arr);

        tracing::debug!(
            refs = refs.len(),
            dropped = ref_arr.len() - refs.len(),
            candidates = candidates.len(),
            "study search complete"
        );

        SearchResults { ref_arr, context_arr, candidates }
    }

    /// Assemble a study from the candidates the user selected.
    ///
    /// Only explicitly selected questions are included; ids not present
    /// among the candidates are ignored. An empty selection produces a
    /// valid document with empty groupings.
    #[must_use]
    pub fn assemble(&self, results: &SearchResults, selected: &[QuestionId]) -> StudyDocument {
        let chosen: Vec<Question> = results
            .candidates
            .iter()
            .filter(|q| selected.contains(&q.id))
            .cloned()
            .collect();

        assemble_study(&chosen, &results.ref_arr, &results.context_arr)
    }
}
