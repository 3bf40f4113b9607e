//! Search strategies for finding questions by free text.
//!
//! This module provides abstractions for different strategies used to
//! match a user's query against stored question text.

use crate::types::Question;

/// Trait for question search strategies.
///
/// Different strategies can be combined to provide comprehensive
/// matching with fallbacks.
pub trait SearchStrategy: Send + Sync {
    /// Find matching questions for a query string.
    ///
    /// # Arguments
    /// * `query` - The search query (free text typed by the user)
    /// * `questions` - The available questions to search
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// A vector of matching questions, sorted by relevance.
    fn find_matches<'a>(
        &self,
        query: &str,
        questions: &'a [Question],
        limit: usize,
    ) -> Vec<&'a Question>;

    /// Get the name of this search strategy (for debugging/logging).
    fn name(&self) -> &'static str;
}

/// Fuzzy string matching over question text.
pub struct FuzzySearch {
    /// Minimum score threshold (0-1000).
    pub min_score: i64,
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self { min_score: 50 }
    }
}

impl SearchStrategy for FuzzySearch {
    fn find_matches<'a>(
        &self,
        query: &str,
        questions: &'a [Question],
        limit: usize,
    ) -> Vec<&'a Question> {
        use fuzzy_matcher::skim::SkimMatcherV2;
        use fuzzy_matcher::FuzzyMatcher;

        let matcher = SkimMatcherV2::default();
        let query_lower = query.to_lowercase();

        let mut scored: Vec<_> = questions
            .iter()
            .filter_map(|q| {
                let score = matcher
                    .fuzzy_match(&q.question.to_lowercase(), &query_lower)
                    .unwrap_or(0);
                if score >= self.min_score {
                    Some((q, score))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().take(limit).map(|(q, _)| q).collect()
    }

    fn name(&self) -> &'static str {
        "FuzzySearch"
    }
}

/// Exact substring matching over question text and book name.
pub struct SubstringSearch;

impl SearchStrategy for SubstringSearch {
    fn find_matches<'a>(
        &self,
        query: &str,
        questions: &'a [Question],
        limit: usize,
    ) -> Vec<&'a Question> {
        let query_lower = query.to_lowercase();
        if query_lower.trim().is_empty() {
            return Vec::new();
        }

        questions
            .iter()
            .filter(|q| {
                q.question.to_lowercase().contains(&query_lower)
                    || q.book.to_lowercase().contains(&query_lower)
            })
            .take(limit)
            .collect()
    }

    fn name(&self) -> &'static str {
        "SubstringSearch"
    }
}

/// Composite search that tries multiple strategies.
pub struct CompositeSearch {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl CompositeSearch {
    /// Create a new composite search with the given strategies.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn SearchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Create with default strategies (substring first, then fuzzy).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Box::new(SubstringSearch),
            Box::new(FuzzySearch::default()),
        ])
    }
}

impl SearchStrategy for CompositeSearch {
    fn find_matches<'a>(
        &self,
        query: &str,
        questions: &'a [Question],
        limit: usize,
    ) -> Vec<&'a Question> {
        let mut results = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for strategy in &self.strategies {
            for question in strategy.find_matches(query, questions, limit) {
                let key = &question.id;
                if !seen.contains(key) {
                    seen.insert(key.clone());
                    results.push(question);
                    if results.len() >= limit {
                        return results;
                    }
                }
            }
        }

        results
    }

    fn name(&self) -> &'static str {
        "CompositeSearch"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::QuestionId;
    use chrono::Utc;

    fn make_question(text: &str, book: &str) -> Question {
        Question {
            id: QuestionId::generate(),
            theme: "Faith".to_string(),
            question: text.to_string(),
            book: book.to_string(),
            chapter: 1,
            verse_start: 1,
            verse_end: 1,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fuzzy_search() {
        let questions = vec![
            make_question("What did the shepherds see?", "Luke"),
            make_question("Who built the ark?", "Genesis"),
            make_question("Where was Jesus born?", "Matthew"),
        ];

        let search = FuzzySearch::default();
        let results = search.find_matches("shepherds", &questions, 10);

        assert_eq!(results.len(), 1);
        assert!(results[0].question.contains("shepherds"));
    }

    #[test]
    fn test_substring_search_matches_book_name() {
        let questions = vec![
            make_question("Who built the ark?", "Genesis"),
            make_question("Where was Jesus born?", "Matthew"),
        ];

        let search = SubstringSearch;
        let results = search.find_matches("genesis", &questions, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].book, "Genesis");
    }

    #[test]
    fn test_composite_dedups_across_strategies() {
        let questions = vec![make_question("Who built the ark?", "Genesis")];

        let search = CompositeSearch::with_defaults();
        let results = search.find_matches("ark", &questions, 10);
        assert_eq!(results.len(), 1);
    }
}
