// Fixed texts of the chat modal.

/// Seed message for a project conversation.
/// Replace: {project}, {level}, {matching}, {missing}
pub const SEED_PROMPT_TEMPLATE: &str = "Project: {project}\n\
    Level: {level}\n\
    Matching Skills: {matching}\n\
    Missing Skills: {missing}\n\
    Give a detailed project description.";

pub const TYPING_TEXT: &str = "Bot is typing...";

/// Prefix of the bubble shown when the service answers with an error field.
pub const SERVICE_ERROR_PREFIX: &str = "Sorry, there was an error: ";

pub const TRANSPORT_FAILURE_TEXT: &str = "Oops! Something went wrong. Please try again.";

pub fn seed_prompt(project: &str, level: &str, matching: &[String], missing: &[String]) -> String {
    SEED_PROMPT_TEMPLATE
        .replace("{project}", project)
        .replace("{level}", level)
        .replace("{matching}", &matching.join(", "))
        .replace("{missing}", &missing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_prompt_lines() {
        let prompt = seed_prompt(
            "Alpha",
            "Intermediate",
            &["Python".to_string(), "SQL".to_string()],
            &["Go".to_string()],
        );
        let lines: Vec<_> = prompt.lines().collect();
        assert_eq!(lines[0], "Project: Alpha");
        assert_eq!(lines[1], "Level: Intermediate");
        assert_eq!(lines[2], "Matching Skills: Python, SQL");
        assert_eq!(lines[3], "Missing Skills: Go");
        assert_eq!(lines[4], "Give a detailed project description.");
    }
}
