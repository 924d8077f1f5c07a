//! Resume text parsing module.

mod resume_parser;

pub use resume_parser::{parse, strip_bullet_marker};
