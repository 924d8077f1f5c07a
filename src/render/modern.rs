//! Modern theme: ruled header, centered uppercase name, trailing heading rules.

use crate::model::ResumeDocument;

use super::tree::{
    Alignment, BulletLine, ContactChip, ContainerChrome, HeaderBlock, Heading, HeadingTier,
    SectionBlock, VisualTree,
};

const BULLET: char = '\u{2022}';

pub(super) fn render(doc: &ResumeDocument) -> VisualTree {
    let header = HeaderBlock {
        name: doc.identity.display_name.clone(),
        uppercase_name: true,
        alignment: Alignment::Center,
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
                    accent_underline: false,
                    // Every heading carries the rule filling the rest of
                    // the row; primary headings paint it heavier.
                    trailing_rule: true,
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
        chrome: ContainerChrome::RuledHeader,
        header,
        sections,
    }
}
