//! Resume composition and the text-generation boundary.
//!
//! Two paths produce raw resume text: [`compose`] assembles it
//! deterministically from the form, and [`generate_resume`] delegates to
//! an injected [`TextGenerator`] collaborator with bounded retry. Both
//! emit the block format the section parser accepts.

mod prompt;

pub use prompt::{build_prompt, Prompt, GENERATION_SYSTEM};

use std::thread;
use std::time::Duration;

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The resume input form.
///
/// Field names mirror the persisted `formData` record, so this round-trips
/// through the store and the local cache unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeForm {
    pub name: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub achievements: String,
    pub custom_sections: Vec<CustomSection>,
}

/// A user-defined extra section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

impl ResumeForm {
    /// Check that all required fields are filled.
    pub fn validate(&self) -> Result<()> {
        let required = [
            &self.name,
            &self.skills,
            &self.experience,
            &self.education,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(Error::Validation(
                "Please fill in all required fields (Name, Skills, Experience, and Education)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Deterministically assemble resume text from the form.
///
/// No backend involved: this is the offline path. Output blocks, joined by
/// blank lines: identity (name + synthesized contact line), SUMMARY,
/// EXPERIENCE, EDUCATION, TECHNICAL SKILLS, optional ACHIEVEMENTS, then
/// bold-wrapped custom sections. Custom sections missing a title or
/// content are skipped.
pub fn compose(form: &ResumeForm) -> Result<String> {
    form.validate()?;

    let slug = form.name.to_lowercase().replace(char::is_whitespace, "");
    let slug_dashed = form.name.to_lowercase().replace(char::is_whitespace, "-");
    let first_skill = form.skills.split(',').next().unwrap_or("").trim();

    let mut blocks = vec![
        format!(
            "{}\n{slug}@email.com | linkedin.com/in/{slug_dashed} | San Francisco, CA | (123) 456-7890",
            form.name
        ),
        format!(
            "SUMMARY\n{first_skill} professional with expertise in {}",
            form.skills
        ),
        format!("EXPERIENCE\n{}", form.experience),
        format!("EDUCATION\n{}", form.education),
        format!("TECHNICAL SKILLS\n{}", form.skills),
    ];

    if !form.achievements.trim().is_empty() {
        blocks.push(format!("ACHIEVEMENTS\n{}", form.achievements));
    }

    for section in &form.custom_sections {
        if section.title.trim().is_empty() || section.content.trim().is_empty() {
            continue;
        }
        blocks.push(format!(
            "**{}**\n{}",
            section.title.to_uppercase(),
            section.content
        ));
    }

    Ok(blocks.join("\n\n"))
}

/// The text-generation collaborator boundary.
///
/// Implementations wrap whatever backend produces the resume prose; the
/// library only requires plain text back. Implementations map transport
/// failures onto the error taxonomy (`AuthFailed`, `RateLimited`,
/// `QuotaExceeded`, `Timeout`, `Generation`) so callers never see a raw
/// transport error.
pub trait TextGenerator {
    fn generate(&self, prompt: &Prompt) -> Result<String>;
}

/// Bounded retry policy for generation requests.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy with no delays, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay before the next attempt after the given failure.
    ///
    /// Rate limiting serves a doubled penalty on top of the standard
    /// per-retry delay, so it waits three base delays in total.
    pub fn backoff(&self, err: &Error) -> Duration {
        match err {
            Error::RateLimited => self.base_delay * 3,
            _ => self.base_delay,
        }
    }
}

/// Generate resume text via the collaborator, with bounded retry.
///
/// Auth and quota failures are final. Rate limiting backs off at three
/// base delays before retrying; timeouts and other generation failures
/// retry at the base delay until attempts run out, then surface the last
/// cause.
pub fn generate_resume(
    generator: &dyn TextGenerator,
    form: &ResumeForm,
    policy: &RetryPolicy,
) -> Result<String> {
    form.validate()?;
    let prompt = build_prompt(form);

    let mut attempt = 0u32;
    loop {
        attempt += 1;
        debug!("generation attempt {attempt}/{}", policy.max_attempts);

        let err = match generator.generate(&prompt) {
            Ok(raw) => return Ok(clean_response(&raw)),
            Err(err) => err,
        };

        match &err {
            Error::AuthFailed | Error::QuotaExceeded => return Err(err),
            Error::RateLimited | Error::Timeout | Error::Generation(_)
                if attempt < policy.max_attempts =>
            {
                warn!("generation attempt {attempt} failed: {err}");
                thread::sleep(policy.backoff(&err));
            }
            _ => return Err(err),
        }
    }
}

/// Scrub a backend response into parseable raw text.
///
/// Removes stray formatting symbols and markup, normalizes bullet markers
/// to `- `, and collapses runs of blank lines to single block breaks.
pub fn clean_response(content: &str) -> String {
    let symbols = Regex::new(r"[*+#~]").unwrap();
    let tags = Regex::new(r"<[^>]*>").unwrap();
    let spacing = Regex::new(r"\n{3,}").unwrap();
    let bullets = Regex::new(r"(?m)^[-\u{2022}]\s*").unwrap();

    let content = symbols.replace_all(content, "");
    let content = tags.replace_all(&content, "");
    let content = spacing.replace_all(&content, "\n\n");
    let content = bullets.replace_all(&content, "- ");
    content.trim().to_string()
}
