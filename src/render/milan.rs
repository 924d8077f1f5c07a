//! Milan theme: card sections on a left accent rule, icon-badged headings.

use crate::model::ResumeDocument;

use super::tree::{
    Alignment, BulletLine, ContactChip, ContainerChrome, HeaderBlock, Heading, HeadingTier,
    SectionBlock, VisualTree,
};

const BULLET: char = '\u{2022}';

/// Keyword → icon table, in lookup order. First match wins.
const SECTION_ICONS: [(&str, &str); 10] = [
    ("profile", "\u{1F464}"),
    ("skills", "\u{1F4AA}"),
    ("strengths", "\u{2B50}"),
    ("education", "\u{1F393}"),
    ("awards", "\u{1F3C6}"),
    ("volunteering", "\u{2764}\u{FE0F}"),
    ("hobbies", "\u{1F3AF}"),
    ("projects", "\u{1F680}"),
    ("languages", "\u{1F310}"),
    ("certifications", "\u{1F4DC}"),
];

const DEFAULT_ICON: &str = "\u{1F4DD}";

/// Look up the heading icon for a section title.
///
/// Case-insensitive substring match against the un-bolded title; falls
/// back to a generic note glyph when nothing matches.
pub fn section_icon(title: &str) -> &'static str {
    let title = title.replace("**", "").to_lowercase();
    SECTION_ICONS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

pub(super) fn render(doc: &ResumeDocument) -> VisualTree {
    let header = HeaderBlock {
        name: doc.identity.display_name.clone(),
        uppercase_name: true,
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
                    icon: Some(section_icon(&section.title)),
                    accent_underline: false,
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
                card: true,
            }
        })
        .collect();

    VisualTree {
        chrome: ContainerChrome::CardGrid,
        header,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_icon_lookup() {
        assert_eq!(section_icon("PROJECTS"), "\u{1F680}");
        assert_eq!(section_icon("Technical Skills"), "\u{1F4AA}");
        assert_eq!(section_icon("**EDUCATION**"), "\u{1F393}");
        assert_eq!(section_icon("Objective"), "\u{1F4DD}");
    }

    #[test]
    fn test_icon_first_match_wins() {
        // "skills" sits before "education" in the table.
        assert_eq!(section_icon("Skills Education"), "\u{1F4AA}");
    }

    #[test]
    fn test_milan_sections_are_cards_with_icons() {
        let doc = parse("Jane\n\nEXPERIENCE\n- Led team\n\nObjective\nGrow");
        let tree = render(&doc);
        assert_eq!(tree.chrome, ContainerChrome::CardGrid);
        assert!(tree.sections.iter().all(|s| s.card));
        // Every heading gets an icon, default included.
        assert_eq!(tree.sections[1].heading.icon, Some("\u{1F4DD}"));
        assert_eq!(tree.sections[0].heading.tier, HeadingTier::Primary);
    }
}
