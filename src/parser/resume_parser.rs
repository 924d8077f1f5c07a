//! Splits raw resume text into the structured content model.
//!
//! Raw text arrives either from the generation backend (uppercase headers,
//! hyphen bullets) or from manual edits. Blocks are delimited by blank
//! lines; block 0 is always the identity block, every later block is one
//! titled section.

use crate::model::{strip_bold_markers, ContactLine, Identity, ResumeDocument, Section};

/// Parse raw resume text into a [`ResumeDocument`].
///
/// This never fails: empty input yields an empty document, a title-only
/// block yields a section with no lines. The document is reconstructed
/// from scratch on every call.
pub fn parse(raw: &str) -> ResumeDocument {
    let mut blocks = raw
        .split("\n\n")
        .map(block_lines)
        .filter(|lines| !lines.is_empty());

    let identity = match blocks.next() {
        Some(lines) => parse_identity(&lines),
        None => Identity::default(),
    };

    let sections = blocks.map(|lines| parse_section(&lines)).collect();

    ResumeDocument { identity, sections }
}

/// Non-empty trimmed-end lines of a block. A block whose lines are all
/// blank is represented as empty and dropped by the caller.
fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn parse_identity(lines: &[&str]) -> Identity {
    let display_name = strip_bold_markers(lines[0]);
    // Contact facts may arrive pipe-joined on a single line; each fact is
    // classified independently and re-joined with " | " at display time.
    let contact_lines = lines[1..]
        .iter()
        .flat_map(|l| l.split('|'))
        .map(str::trim)
        .filter(|fact| !fact.is_empty())
        .map(ContactLine::classify)
        .collect();
    Identity {
        display_name,
        contact_lines,
    }
}

fn parse_section(lines: &[&str]) -> Section {
    let body = lines[1..]
        .iter()
        .map(|l| strip_bullet_marker(l))
        .collect();
    Section::from_raw_title(lines[0].trim(), body)
}

/// Strip a single leading `-` or `*` bullet marker and trim the line.
///
/// The marker is normalization-only: the theme-specific glyph is applied
/// at render time, never stored.
pub fn strip_bullet_marker(line: &str) -> String {
    let trimmed = line.trim();
    trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactKind;

    #[test]
    fn test_parse_empty() {
        let doc = parse("");
        assert!(doc.is_empty());
        assert_eq!(doc.sections.len(), 0);
    }

    #[test]
    fn test_parse_blank_blocks_dropped() {
        let doc = parse("Jane Doe\n\n\n\nEXPERIENCE\n- Led team");
        assert_eq!(doc.identity.display_name, "Jane Doe");
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn test_parse_identity_block() {
        let doc = parse("**Jane Doe**\njane@x.com\nlinkedin.com/in/jane\n(123) 456-7890");
        assert_eq!(doc.identity.display_name, "Jane Doe");
        let kinds: Vec<_> = doc.identity.contact_lines.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Profile, ContactKind::Plain]
        );
    }

    #[test]
    fn test_parse_bullet_normalization() {
        let doc = parse("Jane\n\nEXPERIENCE\n- Built a thing\n* Shipped it\nNo marker");
        assert_eq!(
            doc.sections[0].lines,
            vec!["Built a thing", "Shipped it", "No marker"]
        );
    }

    #[test]
    fn test_parse_title_only_section() {
        let doc = parse("Jane\n\nPROJECTS");
        assert_eq!(doc.sections[0].title, "PROJECTS");
        assert!(doc.sections[0].is_empty());
    }

    #[test]
    fn test_parse_bold_title_primary_before_strip() {
        let doc = parse("Jane\n\n**Projects**\nThing one");
        assert_eq!(doc.sections[0].title, "Projects");
        assert!(doc.sections[0].is_primary);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "Jane Doe\njane@x.com\n\nEXPERIENCE\n- Led team of 5";
        assert_eq!(parse(raw), parse(raw));
    }

    #[test]
    fn test_strip_bullet_marker_only_once() {
        assert_eq!(strip_bullet_marker("- - nested"), "- nested");
        assert_eq!(strip_bullet_marker("plain"), "plain");
    }

    #[test]
    fn test_end_to_end_example() {
        let raw = "Jane Doe\njane@x.com | linkedin.com/in/jane-doe\n\n\
                   EXPERIENCE\n- Led team of 5\n- Shipped product X\n\n\
                   EDUCATION\nBS Computer Science";
        let doc = parse(raw);

        assert_eq!(doc.identity.display_name, "Jane Doe");
        assert_eq!(doc.identity.contact_lines.len(), 2);
        assert_eq!(doc.identity.contact_lines[0].kind, ContactKind::Email);
        assert_eq!(doc.identity.contact_lines[1].kind, ContactKind::Profile);

        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].title, "EXPERIENCE");
        assert!(doc.sections[0].is_primary);
        assert_eq!(
            doc.sections[0].lines,
            vec!["Led team of 5", "Shipped product X"]
        );
        assert_eq!(doc.sections[1].title, "EDUCATION");
        assert!(doc.sections[1].is_primary);
        assert_eq!(doc.sections[1].lines, vec!["BS Computer Science"]);
    }
}
