//! Prompt construction for the text-generation backend.

use super::ResumeForm;

/// System instruction sent with every generation request.
pub const GENERATION_SYSTEM: &str = "You are a professional resume writer. Create clean, \
minimal resumes with clear sections and simple bullet points. Use plain text only - no \
special formatting, no HTML, no markdown, no symbols except simple hyphens for bullet \
points. Maintain consistent spacing between sections.";

/// A prompt pair for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the generation prompt from the form.
///
/// The template shows the backend the exact output shape the parser
/// accepts: uppercase section headers, hyphen bullets, blank lines
/// between sections, no markup.
pub fn build_prompt(form: &ResumeForm) -> Prompt {
    let slug = form.name.to_lowercase().replace(char::is_whitespace, "");
    let slug_dashed = form.name.to_lowercase().replace(char::is_whitespace, "-");
    let first_skill = form.skills.split(',').next().unwrap_or("").trim();

    let experience_bullets = form
        .experience
        .lines()
        .map(|exp| format!("- {exp}"))
        .collect::<Vec<_>>()
        .join("\n");

    let skill_bullets = form
        .skills
        .split(',')
        .map(|skill| format!("- {}", skill.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    let achievements_block = if form.achievements.trim().is_empty() {
        String::new()
    } else {
        let bullets = form
            .achievements
            .lines()
            .map(|a| format!("- {a}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("ACHIEVEMENTS\n{bullets}\n\n")
    };

    let user = format!(
        "Create a professional resume with the following information. Format it exactly \
as shown below, without any special characters, symbols, or tags:\n\n\
{name}\n\n\
{slug}@email.com | linkedin.com/in/{slug_dashed} | San Francisco, CA | (123) 456-7890\n\n\
SUMMARY\n{first_skill} professional with expertise in {skills}.\n\n\
EXPERIENCE\n{experience_bullets}\n\n\
EDUCATION\n{education}\n\n\
TECHNICAL SKILLS\n{skill_bullets}\n\n\
{achievements_block}\
Please ensure:\n\
1. Use UPPERCASE for section headers (SUMMARY, EXPERIENCE, etc.)\n\
2. Use simple bullet points with a hyphen (-)\n\
3. No special characters or formatting symbols\n\
4. Clean, professional spacing between sections\n\
5. No HTML tags or special formatting",
        name = form.name,
        skills = form.skills,
        education = form.education,
    );

    Prompt {
        system: GENERATION_SYSTEM.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ResumeForm {
        ResumeForm {
            name: "Jane Doe".to_string(),
            skills: "Rust, Distributed Systems".to_string(),
            experience: "Led team of 5\nShipped product X".to_string(),
            education: "BS Computer Science".to_string(),
            achievements: String::new(),
            custom_sections: vec![],
        }
    }

    #[test]
    fn test_prompt_contains_identity_slug() {
        let prompt = build_prompt(&form());
        assert!(prompt.user.contains("janedoe@email.com"));
        assert!(prompt.user.contains("linkedin.com/in/jane-doe"));
    }

    #[test]
    fn test_prompt_hyphen_bullets() {
        let prompt = build_prompt(&form());
        assert!(prompt.user.contains("- Led team of 5"));
        assert!(prompt.user.contains("- Rust\n- Distributed Systems"));
    }

    #[test]
    fn test_prompt_omits_empty_achievements() {
        let prompt = build_prompt(&form());
        assert!(!prompt.user.contains("ACHIEVEMENTS"));

        let mut with = form();
        with.achievements = "Award".to_string();
        assert!(build_prompt(&with).user.contains("ACHIEVEMENTS\n- Award"));
    }
}
