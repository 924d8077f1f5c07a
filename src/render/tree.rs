//! Visual tree types shared by all theme renderers.
//!
//! The tree is the intermediate "what to render" value: a container with
//! a header block and section blocks built from a small primitive
//! vocabulary (heading, bullet line, contact chip). Painting it to a
//! concrete surface is a separate concern (see [`super::html`]).

use serde::Serialize;

use crate::model::{ContactKind, ContactLine};

/// Overall container treatment, one per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerChrome {
    /// Centered single column, minimal decoration.
    Centered,
    /// Ruled header band above a left-aligned column.
    RuledHeader,
    /// Sections boxed as cards along a left accent rule.
    CardGrid,
}

/// Horizontal alignment for header content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

/// Emphasis tier for a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingTier {
    /// Larger scale, accent treatment.
    Primary,
    /// Regular scale.
    Secondary,
}

/// The complete styled output of one render pass.
#[derive(Debug, Clone, Serialize)]
pub struct VisualTree {
    pub chrome: ContainerChrome,
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
}

impl VisualTree {
    /// Whether this tree renders the empty state.
    pub fn is_empty(&self) -> bool {
        self.header.name.is_empty()
            && self.header.contacts.is_empty()
            && self.sections.is_empty()
    }
}

/// The identity header: name plus contact chips.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderBlock {
    pub name: String,
    pub uppercase_name: bool,
    pub alignment: Alignment,
    pub contacts: Vec<ContactChip>,
    /// Separator painted between chips.
    pub separator: &'static str,
}

/// One contact fact, with its link target when it is a reference.
#[derive(Debug, Clone, Serialize)]
pub struct ContactChip {
    pub text: String,
    pub kind: ContactKind,
    pub href: Option<String>,
}

impl ContactChip {
    /// Build a chip from a classified contact line.
    ///
    /// Mail references link via `mailto:`; profile references link to the
    /// text itself; plain facts carry no link. Missing fields simply do
    /// not appear — there is no placeholder text.
    pub fn from_contact(contact: &ContactLine) -> Self {
        let href = match contact.kind {
            ContactKind::Email => Some(format!("mailto:{}", contact.text)),
            ContactKind::Profile => Some(contact.text.clone()),
            ContactKind::Plain => None,
        };
        Self {
            text: contact.text.clone(),
            kind: contact.kind,
            href,
        }
    }
}

/// One rendered section: heading plus bullet lines.
#[derive(Debug, Clone, Serialize)]
pub struct SectionBlock {
    pub heading: Heading,
    pub lines: Vec<BulletLine>,
    /// Whether the section is boxed as a card (Milan).
    pub card: bool,
}

/// A two-tier section heading with per-theme decoration.
#[derive(Debug, Clone, Serialize)]
pub struct Heading {
    pub text: String,
    pub tier: HeadingTier,
    /// Icon glyph for primary headings in icon-bearing themes.
    pub icon: Option<&'static str>,
    /// Accent underline beneath the heading text.
    pub accent_underline: bool,
    /// Horizontal rule filling the space after the heading text.
    pub trailing_rule: bool,
}

/// A single content line with the theme's bullet glyph applied.
#[derive(Debug, Clone, Serialize)]
pub struct BulletLine {
    pub text: String,
    pub glyph: char,
}
