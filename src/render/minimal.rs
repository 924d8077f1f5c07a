//! Minimal theme: centered column, accent underline on primary headings.

use crate::model::ResumeDocument;

use super::tree::{
    Alignment, BulletLine, ContactChip, ContainerChrome, HeaderBlock, Heading, HeadingTier,
    SectionBlock, VisualTree,
};

const BULLET: char = '\u{2022}';

pub(super) fn render(doc: &ResumeDocument) -> VisualTree {
    let header = HeaderBlock {
        name: doc.identity.display_name.clone(),
        uppercase_name: false,
        alignment: Alignment::Left,
        contacts: doc
            .identity
            .contact_lines
            .iter()
            .map(ContactChip::from_contact)
            .collect(),
        separator: " | ",
    };

    let sections = doc
        .sections
        .iter()
        .map(|section| {
            let tier = if section.is_primary {
                HeadingTier::Primary
            } else {
                HeadingTier::Secondary
            };
            SectionBlock {
                heading: Heading {
                    text: section.title.clone(),
                    tier,
                    icon: None,
                    // Primary headings get the accent underline; secondary
                    // headings keep a hairline only.
                    accent_underline: section.is_primary,
                    trailing_rule: false,
                },
                lines: section
                    .lines
                    .iter()
                    .map(|line| BulletLine {
                        text: line.clone(),
                        glyph: BULLET,
                    })
                    .collect(),
                card: false,
            }
        })
        .collect();

    VisualTree {
        chrome: ContainerChrome::Centered,
        header,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_minimal_emphasis_split() {
        let doc = parse("Jane\n\nEXPERIENCE\n- Led team\n\nObjective\nGrow");
        let tree = render(&doc);
        assert_eq!(tree.chrome, ContainerChrome::Centered);
        assert_eq!(tree.sections[0].heading.tier, HeadingTier::Primary);
        assert!(tree.sections[0].heading.accent_underline);
        assert_eq!(tree.sections[1].heading.tier, HeadingTier::Secondary);
        assert!(!tree.sections[1].heading.accent_underline);
    }

    #[test]
    fn test_minimal_bullet_glyph() {
        let doc = parse("Jane\n\nSKILLS\n- Rust");
        let tree = render(&doc);
        assert_eq!(tree.sections[0].lines[0].glyph, '\u{2022}');
        assert_eq!(tree.sections[0].lines[0].text, "Rust");
    }
}
