//! In-memory resume content model.
//!
//! A [`ResumeDocument`] is the normalized output of the section parser:
//! an identity block followed by ordered sections. It is rebuilt from
//! scratch on every parse and never mutated in place.

mod document;
mod section;

pub use document::{Identity, ResumeDocument};
pub use section::{strip_bold_markers, ContactKind, ContactLine, Section};
