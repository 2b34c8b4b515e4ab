// Mentor system prompts for the chat proxy.
// The level is read from the seed message the page sends first.

use crate::models::chat::{ChatMessage, Role};
use crate::models::project::Level;

pub const MENTOR_SYSTEM: &str = "You are an expert AI project mentor. \
    The user picked a project recommended from their skills and wants help building it. \
    Keep answers practical and tailored to the skills they already have.";

const BEGINNER_GUIDANCE: &str = "Provide a beginner-friendly explanation of this project. Explain:\n\
    - What the project is about in simple terms\n\
    - Why it is useful or interesting\n\
    - Easy tools or technologies to use (beginner-level only)\n\
    - Simple step-by-step guide to build it\n\
    - Extra tips to help a beginner understand and complete it\n\
    Avoid complex terms, frameworks, or deep logic.";

const INTERMEDIATE_GUIDANCE: &str = "Describe this project to someone with basic development knowledge. Include:\n\
    - A moderately detailed project description\n\
    - Suggested tech stack (frontend, backend, database)\n\
    - Key implementation steps and flow\n\
    - Typical challenges and how to solve them\n\
    - Basic tips on testing or deployment\n\
    Avoid overly simple or enterprise-level content.";

const ADVANCED_GUIDANCE: &str = "Provide an advanced and complete technical explanation of this project. Cover:\n\
    - Full system architecture (frontend, backend, APIs, database)\n\
    - Security considerations\n\
    - CI/CD and deployment process (e.g., Docker, cloud platforms)\n\
    - Performance optimization, testing strategies\n\
    - How to scale, maintain, and make it production-ready\n\
    - Optional: ideas for extending the project in real-world scenarios\n\
    Use technical language assuming the user has solid development experience.";

pub fn level_guidance(level: Level) -> &'static str {
    match level {
        Level::Beginner => BEGINNER_GUIDANCE,
        Level::Intermediate => INTERMEDIATE_GUIDANCE,
        Level::Advanced => ADVANCED_GUIDANCE,
    }
}

/// Finds the `Level:` line of the first user message, if any.
pub fn seeded_level(messages: &[ChatMessage]) -> Option<Level> {
    let first = messages.iter().find(|m| m.role == Role::User)?;
    first
        .content
        .lines()
        .find_map(|line| line.trim().strip_prefix("Level:"))
        .and_then(|level| level.parse().ok())
}

pub fn system_prompt_for(messages: &[ChatMessage]) -> String {
    match seeded_level(messages) {
        Some(level) => format!("{MENTOR_SYSTEM}\n\n{}", level_guidance(level)),
        None => MENTOR_SYSTEM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_is_read_from_seed() {
        let messages = vec![
            ChatMessage::user("Project: Alpha\nLevel: Advanced\nMatching Skills: Go"),
            ChatMessage::assistant("Sure."),
        ];
        assert_eq!(seeded_level(&messages), Some(Level::Advanced));
        assert!(system_prompt_for(&messages).contains("CI/CD"));
    }

    #[test]
    fn test_free_chat_gets_plain_mentor_prompt() {
        let messages = vec![ChatMessage::user("How do I start?")];
        assert_eq!(seeded_level(&messages), None);
        assert_eq!(system_prompt_for(&messages), MENTOR_SYSTEM);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let messages = vec![ChatMessage::user("Level: Wizard")];
        assert_eq!(system_prompt_for(&messages), MENTOR_SYSTEM);
    }
}
