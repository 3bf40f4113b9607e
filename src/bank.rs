//! The question bank: an explicitly constructed data-access object that
//! owns the stored questions, the book metadata, and the theme list.
//!
//! One bank is initialized per process and injected into the services
//! that need it; there is no module-level shared state. Collections are
//! persisted as JSON documents under a single data directory.

use crate::error::{Error, Result};
use crate::types::{Book, Question, QuestionDraft, QuestionId};
use crate::validation;
use std::path::Path;

/// File name of the question collection document.
const QUESTIONS_FILE: &str = "questions.json";
/// File name of the read-only book metadata document.
const BOOKS_FILE: &str = "books.json";
/// File name of the allowed theme list document.
const THEMES_FILE: &str = "themes.json";

/// Owns the question collection, book metadata and theme list.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    books: Vec<Book>,
    themes: Vec<String>,
}

impl QuestionBank {
    /// Build a bank from already-loaded collections.
    #[must_use]
    pub fn new(questions: Vec<Question>, books: Vec<Book>, themes: Vec<String>) -> Self {
        Self { questions, books, themes }
    }

    /// Load the bank from JSON documents in `data_dir`.
    ///
    /// A missing questions file starts an empty collection (first run);
    /// missing book or theme files are configuration errors, since
    /// validation and context resolution cannot work without them.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let questions = match read_json::<Vec<Question>>(&data_dir.join(QUESTIONS_FILE)) {
            Ok(qs) => qs,
            Err(Error::Io { .. }) => {
                tracing::info!("No question collection at {}, starting empty", data_dir.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let books: Vec<Book> = read_json(&data_dir.join(BOOKS_FILE)).map_err(|e| match e {
            Error::Io { source, path } => Error::config(
                format!("cannot read book metadata at {path:?}: {source}"),
                "Provide books.json in the data directory",
            ),
            other => other,
        })?;

        let themes: Vec<String> = read_json(&data_dir.join(THEMES_FILE)).map_err(|e| match e {
            Error::Io { source, path } => Error::config(
                format!("cannot read theme list at {path:?}: {source}"),
                "Provide themes.json in the data directory",
            ),
            other => other,
        })?;

        tracing::info!(
            questions = questions.len(),
            books = books.len(),
            themes = themes.len(),
            "Loaded question bank from {}",
            data_dir.display()
        );

        Ok(Self { questions, books, themes })
    }

    /// Persist the question collection back to `data_dir`.
    ///
    /// Book metadata and themes are read-only at runtime and are never
    /// written back.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join(QUESTIONS_FILE);
        let json = serde_json::to_string_pretty(&self.questions)
            .map_err(|e| Error::parse(e.to_string(), path.clone()))?;
        fs_err::write(&path, json).map_err(|e| Error::io(e, path.clone()))?;
        tracing::info!(questions = self.questions.len(), "Saved question bank to {}", path.display());
        Ok(())
    }

    /// Every stored question, approved or not (admin view).
    #[must_use]
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    /// The approved subset end users search against.
    #[must_use]
    pub fn approved_questions(&self) -> Vec<Question> {
        self.questions.iter().filter(|q| q.is_approved).cloned().collect()
    }

    /// Questions awaiting review.
    #[must_use]
    pub fn pending_questions(&self) -> Vec<Question> {
        self.questions.iter().filter(|q| !q.is_approved).cloned().collect()
    }

    /// The read-only book metadata collection.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The allowed theme list.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Submit a contributor draft. Validates every write-boundary
    /// invariant and stores the question unapproved.
    pub fn contribute(&mut self, draft: QuestionDraft) -> Result<QuestionId> {
        let question = validation::admit_draft(draft, &self.themes)?;
        let id = question.id.clone();
        tracing::info!(%id, book = %question.book, "question contributed");
        self.questions.push(question);
        Ok(id)
    }

    /// Approve a question for end users. The transition is one-way;
    /// approving an already-approved question is a no-op.
    pub fn approve(&mut self, id: &QuestionId) -> Result<()> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| &q.id == id)
            .ok_or_else(|| Error::UnknownQuestion(id.to_string()))?;
        if !question.is_approved {
            question.is_approved = true;
            tracing::info!(%id, "question approved");
        }
        Ok(())
    }

    /// Replace a question's content with a revised draft, keeping its
    /// identity and approval state. The revision passes the same
    /// validation as a new submission.
    pub fn edit(&mut self, id: &QuestionId, draft: QuestionDraft) -> Result<()> {
        validation::validate_draft(&draft, &self.themes)?;
        let book = crate::canon::normalize_book_name(&draft.book)
            .map_or(draft.book.clone(), ToString::to_string);

        let question = self
            .questions
            .iter_mut()
            .find(|q| &q.id == id)
            .ok_or_else(|| Error::UnknownQuestion(id.to_string()))?;

        question.theme = draft.theme;
        question.question = draft.question.trim().to_string();
        question.book = book;
        question.chapter = draft.chapter;
        question.verse_start = draft.verse_start;
        question.verse_end = draft.verse_end;
        tracing::info!(%id, "question edited");
        Ok(())
    }

    /// Remove a question from the bank.
    pub fn delete(&mut self, id: &QuestionId) -> Result<()> {
        let pos = self
            .questions
            .iter()
            .position(|q| &q.id == id)
            .ok_or_else(|| Error::UnknownQuestion(id.to_string()))?;
        self.questions.remove(pos);
        tracing::info!(%id, "question deleted");
        Ok(())
    }
}

/// Read and deserialize one JSON document.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    serde_json::from_str(&content).map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))
}
