//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{ContactLine, Section};

/// A parsed resume document.
///
/// Section order is preserved from source order; there is no implicit
/// sorting or deduplication. Instances are immutable parser output: a new
/// document replaces the old one whenever the raw text changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// The identity block (name + contact lines).
    pub identity: Identity,

    /// Titled sections in source order.
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            identity: Identity::default(),
            sections: Vec::new(),
        }
    }

    /// Check whether there is nothing to render.
    ///
    /// Empty raw text parses to this state; callers treat it as a valid
    /// "nothing to render" document, not a failure.
    pub fn is_empty(&self) -> bool {
        self.identity.is_empty() && self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Iterate over the sections marked primary.
    pub fn primary_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_primary)
    }

    /// Get plain text content of the whole document, one block per section.
    pub fn plain_text(&self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len() + 1);
        if !self.identity.is_empty() {
            blocks.push(self.identity.plain_text());
        }
        for section in &self.sections {
            let mut block = section.title.clone();
            for line in &section.lines {
                block.push('\n');
                block.push_str(line);
            }
            blocks.push(block);
        }
        blocks.join("\n\n")
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// The identity block: the first block of raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Line 0 of the first block, with bold markers stripped.
    pub display_name: String,

    /// Remaining lines of the first block, classified for display.
    pub contact_lines: Vec<ContactLine>,
}

impl Identity {
    /// Check if the identity block carries no content.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.contact_lines.is_empty()
    }

    /// Contact lines joined with the display separator.
    pub fn contact_text(&self) -> String {
        self.contact_lines
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn plain_text(&self) -> String {
        let mut out = self.display_name.clone();
        for contact in &self.contact_lines {
            out.push('\n');
            out.push_str(&contact.text);
        }
        out
    }
}
