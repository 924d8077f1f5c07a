//! Integration tests for parsing and header tagging.

use resumake::edit::auto_tag;
use resumake::{parse, ContactKind, EditBuffer};

const JANE: &str = "Jane Doe\njane@x.com | linkedin.com/in/jane-doe\n\n\
EXPERIENCE\n- Led team of 5\n- Shipped product X\n\n\
EDUCATION\nBS Computer Science";

#[test]
fn test_end_to_end_document_shape() {
    let doc = parse(JANE);

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

#[test]
fn test_parse_is_structurally_idempotent() {
    assert_eq!(parse(JANE), parse(JANE));
}

#[test]
fn test_primary_detection_rules() {
    let doc = parse("Jane\n\n**Projects**\nx\n\nExperience\ny\n\nObjective\nz");
    assert!(doc.sections[0].is_primary);
    assert!(doc.sections[1].is_primary);
    assert!(!doc.sections[2].is_primary);
}

#[test]
fn test_primary_detection_keeps_substring_semantics() {
    // Containment, not equality: known false positive, intentionally kept.
    let doc = parse("Jane\n\nEducation Philosophy\nTeach by example");
    assert!(doc.sections[0].is_primary);
}

#[test]
fn test_bullet_marker_stripped_at_parse_time() {
    let doc = parse("Jane\n\nSKILLS\n- Built a thing");
    assert_eq!(doc.sections[0].lines[0], "Built a thing");
}

#[test]
fn test_empty_input_is_valid_empty_state() {
    let doc = parse("");
    assert!(doc.is_empty());
    assert!(doc.identity.display_name.is_empty());
    assert_eq!(doc.sections.len(), 0);
}

#[test]
fn test_contact_classification() {
    let doc = parse("Jane\njane@x.com\nlinkedin.com/in/jane\n(123) 456-7890");
    let kinds: Vec<_> = doc.identity.contact_lines.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ContactKind::Email, ContactKind::Profile, ContactKind::Plain]
    );
}

#[test]
fn test_auto_tag_idempotence() {
    let raw = "Jane Doe\n\nEXPERIENCE\n- Led team\n\nTechnical Skills: Rust";
    let once = auto_tag(raw);
    assert_eq!(auto_tag(&once), once);
    assert!(once.contains("**EXPERIENCE**"));
    assert!(once.contains("**Technical Skills: Rust**"));
}

#[test]
fn test_tagged_text_still_parses_clean() {
    let mut buffer = EditBuffer::new(JANE);
    // Re-setting the same text repeatedly must not accumulate markers.
    for _ in 0..3 {
        let text = buffer.text().to_string();
        buffer.set_text(text);
    }
    let doc = buffer.document();
    assert_eq!(doc.sections[0].title, "EXPERIENCE");
    assert!(doc.sections[0].is_primary);
}
