//! HTML painting for visual trees.
//!
//! Turns the theme-agnostic [`VisualTree`] into a flat HTML string for
//! display and rasterization. Styling here is structural (alignment,
//! scale tiers, rules); exact colors are presentation choices kept in one
//! place so they stay out of the tree.

use std::fmt::Write as _;

use super::tree::{Alignment, ContainerChrome, HeadingTier, VisualTree};

/// Paint a visual tree as an HTML fragment.
///
/// Deterministic: identical trees paint to identical strings.
pub fn paint(tree: &VisualTree) -> String {
    let mut out = String::new();

    let container_class = match tree.chrome {
        ContainerChrome::Centered => "chrome-centered",
        ContainerChrome::RuledHeader => "chrome-ruled",
        ContainerChrome::CardGrid => "chrome-cards",
    };
    let _ = write!(out, "<div class=\"resume {container_class}\">");

    paint_header(&mut out, tree);

    for section in &tree.sections {
        let card_class = if section.card { " card" } else { "" };
        let tier_class = match section.heading.tier {
            HeadingTier::Primary => "primary",
            HeadingTier::Secondary => "secondary",
        };
        let _ = write!(out, "<section class=\"section {tier_class}{card_class}\">");

        let _ = write!(out, "<h2 class=\"heading {tier_class}\">");
        if let Some(icon) = section.heading.icon {
            let _ = write!(out, "<span class=\"icon\">{icon}</span>");
        }
        let _ = write!(out, "{}", escape_html(&section.heading.text));
        if section.heading.trailing_rule {
            out.push_str("<span class=\"rule\"></span>");
        }
        out.push_str("</h2>");
        if section.heading.accent_underline {
            out.push_str("<div class=\"underline\"></div>");
        }

        for line in &section.lines {
            let _ = write!(
                out,
                "<div class=\"bullet\"><span class=\"glyph\">{}</span>{}</div>",
                line.glyph,
                escape_html(&line.text)
            );
        }
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

fn paint_header(out: &mut String, tree: &VisualTree) {
    let align_class = match tree.header.alignment {
        Alignment::Left => "align-left",
        Alignment::Center => "align-center",
    };
    let _ = write!(out, "<header class=\"{align_class}\">");

    if !tree.header.name.is_empty() {
        let name = if tree.header.uppercase_name {
            tree.header.name.to_uppercase()
        } else {
            tree.header.name.clone()
        };
        let _ = write!(out, "<h1 class=\"name\">{}</h1>", escape_html(&name));
    }

    if !tree.header.contacts.is_empty() {
        out.push_str("<div class=\"contacts\">");
        for (i, chip) in tree.header.contacts.iter().enumerate() {
            if i > 0 {
                let _ = write!(out, "<span class=\"sep\">{}</span>", tree.header.separator);
            }
            match &chip.href {
                Some(href) => {
                    let _ = write!(
                        out,
                        "<a class=\"chip\" href=\"{}\">{}</a>",
                        escape_html(href),
                        escape_html(&chip.text)
                    );
                }
                None => {
                    let _ = write!(
                        out,
                        "<span class=\"chip\">{}</span>",
                        escape_html(&chip.text)
                    );
                }
            }
        }
        out.push_str("</div>");
    }

    out.push_str("</header>");
}

/// Escape text content for HTML.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::render::{render, ThemeVariant};

    #[test]
    fn test_paint_is_deterministic() {
        let doc = parse("Jane Doe\njane@x.com\n\nEXPERIENCE\n- Led team");
        let a = paint(&render(&doc, ThemeVariant::Milan));
        let b = paint(&render(&doc, ThemeVariant::Milan));
        assert_eq!(a, b);
    }

    #[test]
    fn test_paint_links() {
        let doc = parse("Jane Doe\njane@x.com | linkedin.com/in/jane");
        let html = paint(&render(&doc, ThemeVariant::Minimal));
        assert!(html.contains("href=\"mailto:jane@x.com\""));
        assert!(html.contains("href=\"linkedin.com/in/jane\""));
    }

    #[test]
    fn test_paint_escapes_content() {
        let doc = parse("Jane <script>\n\nSKILLS\n- C & C++");
        let html = paint(&render(&doc, ThemeVariant::Minimal));
        assert!(html.contains("Jane &lt;script&gt;"));
        assert!(html.contains("C &amp; C++"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_paint_empty_document() {
        let doc = parse("");
        let html = paint(&render(&doc, ThemeVariant::Modern));
        // Empty state still paints a container, with no headings inside.
        assert!(html.starts_with("<div class=\"resume"));
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<h2"));
    }
}
