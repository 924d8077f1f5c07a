//! Rendering module: theme variants over the shared content model.
//!
//! Each variant is a pure function `ResumeDocument -> VisualTree` over the
//! same primitive vocabulary; painting the tree to an HTML surface is the
//! separate, swappable step in [`html`].

mod html;
mod milan;
mod minimal;
mod modern;
mod theme;
mod tree;

pub use html::paint;
pub use milan::section_icon;
pub use theme::ThemeVariant;
pub use tree::{
    Alignment, BulletLine, ContactChip, ContainerChrome, HeaderBlock, Heading, HeadingTier,
    SectionBlock, VisualTree,
};

use crate::model::ResumeDocument;

/// Render a document under the given theme variant.
///
/// Pure and deterministic: identical `(doc, variant)` inputs always
/// produce an identical tree. Never fails for a structurally valid
/// document; an empty document renders to an empty-state tree.
pub fn render(doc: &ResumeDocument, variant: ThemeVariant) -> VisualTree {
    match variant {
        ThemeVariant::Minimal => minimal::render(doc),
        ThemeVariant::Modern => modern::render(doc),
        ThemeVariant::Milan => milan::render(doc),
    }
}

/// Render a document straight to an HTML fragment.
pub fn to_html(doc: &ResumeDocument, variant: ThemeVariant) -> String {
    paint(&render(doc, variant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_render_all_variants_never_fail() {
        for raw in ["", "Jane", "Jane\n\nEXPERIENCE", "Jane\n\nX\n- y\n\nY\n- z"] {
            let doc = parse(raw);
            for variant in ThemeVariant::ALL {
                let _ = render(&doc, variant);
            }
        }
    }

    #[test]
    fn test_render_empty_document() {
        let tree = render(&parse(""), ThemeVariant::Minimal);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_variants_share_classification() {
        let doc = parse("Jane\n\nEXPERIENCE\n- a\n\nObjective\nb");
        for variant in ThemeVariant::ALL {
            let tree = render(&doc, variant);
            assert_eq!(tree.sections[0].heading.tier, HeadingTier::Primary);
            assert_eq!(tree.sections[1].heading.tier, HeadingTier::Secondary);
        }
    }
}
