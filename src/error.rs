//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.
//! Reference-parse failures are deliberately NOT errors: unparseable
//! references degrade to "no match" via `Option` (see [`crate::reference`]).

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// A question submission that violates a write-boundary invariant
    #[error("Invalid question: {message}")]
    Validation {
        /// Which field failed validation.
        field: &'static str,
        /// Human-readable description of the violation.
        message: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Data file parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// A question id that does not exist in the bank
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a validation error naming the offending field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn validation_names_the_field() {
        let err = Error::validation("verseEnd", "verseEnd 3 is before verseStart 7");
        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, "verseEnd");
                assert!(message.contains("verseStart"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn display_includes_hint() {
        let err = Error::config("missing data directory", "Set STUDYBANK_DATA_DIR");
        assert!(err.to_string().contains("STUDYBANK_DATA_DIR"));
    }
}
