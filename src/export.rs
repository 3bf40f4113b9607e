//! Study document rendering for copying and export.
//!
//! Produces the plain-text and Markdown study sheets the presentation
//! layer hands to end users. Rendering never fails: an empty study
//! renders as an explicit empty-state message.

use crate::study::StudyDocument;

/// Message rendered when the study contains no selected questions.
const EMPTY_MESSAGE: &str = "No questions were selected for this study.";

/// Render a study as a plain-text sheet.
#[must_use]
pub fn to_plain_text(doc: &StudyDocument) -> String {
    let mut out = String::new();

    if !doc.ref_arr.is_empty() {
        out.push_str("Study: ");
        out.push_str(&doc.ref_arr.join("; "));
        out.push_str("\n\n");
    }

    for sentence in &doc.context_arr {
        out.push_str(sentence);
        out.push('\n');
    }
    if !doc.context_arr.is_empty() {
        out.push('\n');
    }

    if doc.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for book in &doc.groups {
        out.push_str(&book.book);
        out.push('\n');
        for theme in &book.themes {
            out.push_str("  ");
            out.push_str(&theme.theme);
            out.push('\n');
            for question in &theme.questions {
                out.push_str("    - ");
                out.push_str(question);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}

/// Render a study as Markdown.
///
/// Books become second-level headings, themes third-level, questions a
/// bulleted list.
#[must_use]
pub fn to_markdown(doc: &StudyDocument) -> String {
    let mut out = String::new();

    if !doc.ref_arr.is_empty() {
        out.push_str("# Study: ");
        out.push_str(&doc.ref_arr.join("; "));
        out.push_str("\n\n");
    }

    for sentence in &doc.context_arr {
        out.push_str("> ");
        out.push_str(sentence);
        out.push('\n');
    }
    if !doc.context_arr.is_empty() {
        out.push('\n');
    }

    if doc.is_empty() {
        out.push('*');
        out.push_str(EMPTY_MESSAGE);
        out.push_str("*\n");
        return out;
    }

    for book in &doc.groups {
        out.push_str("## ");
        out.push_str(&book.book);
        out.push_str("\n\n");
        for theme in &book.themes {
            out.push_str("### ");
            out.push_str(&theme.theme);
            out.push_str("\n\n");
            for question in &theme.questions {
                out.push_str("- ");
                out.push_str(question);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::study::{BookGroup, ThemeGroup};

    fn sample_doc() -> StudyDocument {
        StudyDocument {
            ref_arr: vec!["Genesis 1".to_string()],
            theme_arr: vec!["Creation".to_string()],
            context_arr: vec![
                "Genesis is about the beginnings of the world. The author is Moses.".to_string(),
            ],
            groups: vec![BookGroup {
                book: "Genesis".to_string(),
                themes: vec![ThemeGroup {
                    theme: "Creation".to_string(),
                    questions: vec!["Who created the heavens?".to_string()],
                }],
            }],
        }
    }

    #[test]
    fn test_plain_text_contains_all_sections() {
        let text = to_plain_text(&sample_doc());
        assert!(text.contains("Study: Genesis 1"));
        assert!(text.contains("The author is Moses."));
        assert!(text.contains("    - Who created the heavens?"));
    }

    #[test]
    fn test_markdown_headings() {
        let md = to_markdown(&sample_doc());
        assert!(md.contains("# Study: Genesis 1"));
        assert!(md.contains("## Genesis"));
        assert!(md.contains("### Creation"));
        assert!(md.contains("- Who created the heavens?"));
    }

    #[test]
    fn test_empty_study_renders_empty_state() {
        let doc = StudyDocument {
            ref_arr: Vec::new(),
            theme_arr: Vec::new(),
            context_arr: Vec::new(),
            groups: Vec::new(),
        };
        assert!(to_plain_text(&doc).contains("No questions were selected"));
        assert!(to_markdown(&doc).contains("No questions were selected"));
    }
}
