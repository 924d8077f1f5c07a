//! Theme variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of layout variants.
///
/// All variants share parsing output and emphasis classification; they
/// differ only in container chrome, heading typography, bullet glyph,
/// and (Milan only) heading icons. Extending the set means adding a case
/// here plus a rule set under `src/render/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Clean single-column design with underlined primary sections.
    #[default]
    Minimal,
    /// Ruled header with centered name and trailing heading rules.
    Modern,
    /// Card-style sections with a left accent rule and heading icons.
    Milan,
}

impl ThemeVariant {
    /// All variants, in presentation order.
    pub const ALL: [ThemeVariant; 3] = [
        ThemeVariant::Minimal,
        ThemeVariant::Modern,
        ThemeVariant::Milan,
    ];

    /// Lowercase name used in filenames and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeVariant::Minimal => "minimal",
            ThemeVariant::Modern => "modern",
            ThemeVariant::Milan => "milan",
        }
    }

    /// Suggested filename for the export archive of this theme.
    pub fn archive_name(&self) -> String {
        format!("resume-{}.zip", self.name())
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(ThemeVariant::Minimal),
            "modern" => Ok(ThemeVariant::Modern),
            "milan" => Ok(ThemeVariant::Milan),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}
