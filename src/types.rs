//! Core type definitions for the question bank.
//!
//! This module provides the persisted entities (`Question`, `Book`), the
//! `QuestionId` newtype wrapper to prevent accidental mixing of identifier
//! strings at compile time, and the unvalidated `QuestionDraft` submission
//! shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique question identifier, assigned at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    /// Create a new `QuestionId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A study question tied to a scripture passage and a theme.
///
/// Field names serialize in the camelCase shape of the stored documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier, assigned at creation.
    pub id: QuestionId,
    /// Categorical theme tag (e.g., "Faith", "Creation").
    pub theme: String,
    /// The question text itself.
    pub question: String,
    /// Canonical book name (e.g., "Genesis", "1 John").
    pub book: String,
    /// Chapter number within the book.
    pub chapter: u32,
    /// First verse of the passage the question covers.
    pub verse_start: u32,
    /// Last verse of the passage; always `>= verse_start`.
    pub verse_end: u32,
    /// Whether an administrator has approved this question for end users.
    /// Starts false; the transition to true is one-way.
    pub is_approved: bool,
    /// When the question was submitted.
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Format the question's passage as a display reference
    /// (e.g., "Genesis 1:1-3", "John 3:16").
    #[must_use]
    pub fn reference_display(&self) -> String {
        if self.verse_start == self.verse_end {
            format!("{} {}:{}", self.book, self.chapter, self.verse_start)
        } else {
            format!("{} {}:{}-{}", self.book, self.chapter, self.verse_start, self.verse_end)
        }
    }
}

/// An unvalidated question submission.
///
/// Drafts carry no identity or approval state; they become [`Question`]s
/// only by passing the write-boundary checks in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    /// Proposed theme tag.
    pub theme: String,
    /// Proposed question text.
    pub question: String,
    /// Proposed book name.
    pub book: String,
    /// Proposed chapter number.
    pub chapter: u32,
    /// Proposed first verse.
    pub verse_start: u32,
    /// Proposed last verse.
    pub verse_end: u32,
}

/// Read-only book metadata used to generate narrative context blurbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Canonical ordering index (Genesis = 1 ... Revelation = 66).
    pub index: u32,
    /// Book name.
    pub book: String,
    /// Traditional author attribution.
    pub author: String,
    /// One-sentence summary of what the book is about.
    pub context: String,
}
