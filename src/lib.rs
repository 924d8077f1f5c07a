//! # resumake
//!
//! Resume text parsing, multi-theme layout rendering, and export
//! packaging.
//!
//! Raw resume text — uppercase section headers, hyphen bullets, blank
//! lines between blocks — is parsed into a structured document, rendered
//! under one of a fixed set of themes into a visual tree, painted to an
//! HTML surface, and packaged as a downloadable archive.
//!
//! ## Quick Start
//!
//! ```
//! use resumake::{parse, to_html, ThemeVariant};
//!
//! let raw = "Jane Doe\njane@x.com\n\nEXPERIENCE\n- Led team of 5";
//! let doc = parse(raw);
//! assert_eq!(doc.sections[0].title, "EXPERIENCE");
//!
//! let html = to_html(&doc, ThemeVariant::Milan);
//! assert!(html.contains("EXPERIENCE"));
//! ```
//!
//! ## Features
//!
//! - **Structural parsing**: identity block, titled sections, primary
//!   emphasis detection, bullet normalization
//! - **Three themes**: shared content model, per-theme decoration only
//! - **Editing**: idempotent auto-tagging of recognized section headers
//! - **Boundaries as traits**: text generation, persistence, and
//!   rasterization are injected collaborators
//! - **Export**: one-image zip archive named after the active theme

pub mod edit;
pub mod error;
pub mod export;
pub mod generate;
pub mod model;
pub mod parser;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use edit::EditBuffer;
pub use error::{Error, Result};
pub use export::{ExportArtifact, ExportPipeline, Rasterizer, RenderedSurface};
pub use generate::{compose, generate_resume, Prompt, ResumeForm, RetryPolicy, TextGenerator};
pub use model::{ContactKind, ContactLine, Identity, ResumeDocument, Section};
pub use parser::parse;
pub use render::{render, to_html, ThemeVariant, VisualTree};
pub use store::{LocalCache, MemoryStore, ResumeRecord, ResumeStore};

/// An editable preview of one resume under a selected theme.
///
/// Bundles the edit buffer with the active theme and re-derives the
/// document, tree, and surface on demand — the parse-on-change contract
/// in one place.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    buffer: EditBuffer,
    variant: ThemeVariant,
}

impl Preview {
    /// Create a preview over raw text.
    pub fn new(raw: impl Into<String>, variant: ThemeVariant) -> Self {
        Self {
            buffer: EditBuffer::new(raw.into()),
            variant,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> ThemeVariant {
        self.variant
    }

    /// Switch the active theme.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.variant = variant;
    }

    /// Current raw text.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Replace the raw text (runs the auto-tag pass).
    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.buffer.set_text(raw.into());
    }

    /// Parse the current text.
    pub fn document(&self) -> ResumeDocument {
        self.buffer.document()
    }

    /// Render the current text under the active theme.
    pub fn tree(&self) -> VisualTree {
        render(&self.document(), self.variant)
    }

    /// Paint the current state as a capturable surface.
    pub fn surface(&self) -> RenderedSurface {
        RenderedSurface::new(render::paint(&self.tree()))
    }

    /// Export the current surface through the given collaborators.
    pub fn export(
        &self,
        pipeline: &ExportPipeline,
        rasterizer: &dyn Rasterizer,
    ) -> Result<ExportArtifact> {
        pipeline.export(rasterizer, &self.surface(), self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_flow() {
        let mut preview = Preview::new("Jane\n\nEXPERIENCE\n- Led team", ThemeVariant::Minimal);
        assert_eq!(preview.document().sections.len(), 1);

        preview.set_theme(ThemeVariant::Milan);
        let tree = preview.tree();
        assert!(tree.sections[0].heading.icon.is_some());
        assert!(preview.surface().is_ready());
    }

    #[test]
    fn test_preview_tags_headers_on_edit() {
        let mut preview = Preview::new("", ThemeVariant::Modern);
        preview.set_text("Jane\n\nEDUCATION\nBS");
        assert!(preview.text().contains("**EDUCATION**"));
        assert_eq!(preview.document().sections[0].title, "EDUCATION");
    }

    #[test]
    fn test_render_of_parsed_never_fails() {
        for raw in ["", "x", "a\n\nb\n\nc", "\n\n\n", "**X**"] {
            for variant in ThemeVariant::ALL {
                let _ = to_html(&parse(raw), variant);
            }
        }
    }
}
