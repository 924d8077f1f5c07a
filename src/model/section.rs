//! Section and contact-line types.

use serde::{Deserialize, Serialize};

/// Section title keywords that mark a section as primary.
///
/// Matching is case-insensitive substring containment, not equality.
/// A title like "Education Philosophy" therefore also counts as primary;
/// this matches the shipped behavior and is intentionally preserved.
pub const PRIMARY_KEYWORDS: [&str; 4] = ["experience", "education", "skills", "achievements"];

/// One titled resume section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display title, with any bold markers already stripped.
    pub title: String,

    /// Whether this section receives primary (emphasized) treatment.
    pub is_primary: bool,

    /// Content lines, with any leading bullet marker already stripped.
    pub lines: Vec<String>,
}

impl Section {
    /// Create a section, deriving `is_primary` from the raw title line.
    ///
    /// The raw title decides emphasis before markers are stripped: either
    /// it contains a primary keyword, or it was explicitly bold-wrapped.
    pub fn from_raw_title(raw_title: &str, lines: Vec<String>) -> Self {
        let is_primary = is_primary_title(raw_title);
        Self {
            title: strip_bold_markers(raw_title),
            is_primary,
            lines,
        }
    }

    /// Check if the section has no content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decide whether a raw title line gets primary emphasis.
pub fn is_primary_title(raw_title: &str) -> bool {
    let lower = raw_title.to_lowercase();
    PRIMARY_KEYWORDS.iter().any(|kw| lower.contains(kw)) || raw_title.starts_with("**")
}

/// Remove all `**` bold markers from a line.
pub fn strip_bold_markers(line: &str) -> String {
    line.replace("**", "").trim().to_string()
}

/// Classification of a contact line in the identity block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Contains `@`; rendered as a mail reference.
    Email,
    /// Contains `linkedin`; rendered as a clickable profile reference.
    Profile,
    /// Anything else; rendered as plain text.
    Plain,
}

/// A single classified contact line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    /// Display text, trimmed and with a single leading `*` stripped.
    pub text: String,

    /// How the line should be rendered.
    pub kind: ContactKind,
}

impl ContactLine {
    /// Classify a raw contact line from the identity block.
    ///
    /// Exactly one leading `*` is stripped; a doubled marker keeps its
    /// second star.
    pub fn classify(raw: &str) -> Self {
        let text = raw.strip_prefix('*').unwrap_or(raw).trim().to_string();
        let kind = if text.contains('@') {
            ContactKind::Email
        } else if text.to_lowercase().contains("linkedin") {
            ContactKind::Profile
        } else {
            ContactKind::Plain
        };
        Self { text, kind }
    }
}
