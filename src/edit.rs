//! Plain-text editing surface with live section-header tagging.
//!
//! The buffer owns the raw text and is the single source of truth the
//! parser consumes; the content model is rebuilt on demand via
//! [`EditBuffer::document`], never shared back.

use crate::model::ResumeDocument;
use crate::parser;

/// Recognized section header keywords, matched case-insensitively.
pub const SECTION_KEYWORDS: [&str; 12] = [
    "NAME",
    "CONTACT",
    "SUMMARY",
    "EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "TECHNICAL SKILLS",
    "ACHIEVEMENTS",
    "QUALIFICATIONS",
    "PROJECTS",
    "CERTIFICATIONS",
    "LANGUAGES",
];

/// A text buffer that auto-tags recognized section headers on change.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
}

impl EditBuffer {
    /// Create a buffer, tagging the initial content.
    pub fn new(text: impl Into<String>) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text.into());
        buffer
    }

    /// Current raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content, re-running the tagging pass.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = auto_tag(&text.into());
    }

    /// Parse the current text into a fresh content model.
    pub fn document(&self) -> ResumeDocument {
        parser::parse(&self.text)
    }
}

/// Wrap recognized section header lines in bold markers.
///
/// Idempotent: lines already wrapped are left untouched, so repeated
/// passes never accumulate markers.
pub fn auto_tag(text: &str) -> String {
    text.lines()
        .map(tag_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn tag_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() >= 4 {
        return line.to_string();
    }

    let upper = trimmed.to_uppercase();
    let is_header = SECTION_KEYWORDS.iter().any(|kw| {
        upper == *kw
            || upper.starts_with(&format!("{kw}:"))
            || upper.starts_with(&format!("**{kw}"))
    });

    if is_header {
        format!("**{trimmed}**")
    } else {
        line.to_string()
    }
}
