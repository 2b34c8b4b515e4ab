#![allow(dead_code)]

//! Skills entry and resume upload forms on the landing page.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter at least one skill.")]
    NoSkills,
}

/// Splits a comma separated skills field into trimmed, non-empty skills.
pub fn parse_skills(input: &str) -> Result<Vec<String>, FormError> {
    let skills: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if skills.is_empty() {
        return Err(FormError::NoSkills);
    }
    Ok(skills)
}

/// The free-text skills field, fed by typing or by the skills dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsField {
    value: String,
    label: String,
}

impl SkillsField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Text of the "selected skills" line under the field.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Adds a dropdown pick unless it is already listed. Returns whether it was added.
    pub fn pick(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        let mut skills = parse_skills(&self.value).unwrap_or_default();
        if skill.is_empty() || skills.iter().any(|s| s == skill) {
            return false;
        }

        skills.push(skill.to_string());
        self.value = skills.join(", ");
        self.label = format!("Skills: {}", self.value);
        true
    }

    pub fn submit(&self) -> Result<Vec<String>, FormError> {
        parse_skills(&self.value)
    }
}

/// The resume upload input; only the chosen file's name is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeField {
    label: String,
}

impl ResumeField {
    pub fn select(&mut self, file_name: Option<&str>) {
        self.label = match file_name.map(str::trim) {
            Some(name) if !name.is_empty() => format!("Selected file: {name}"),
            _ => String::new(),
        };
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Which of the two intake forms is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Skills,
    Resume,
}

impl FormMode {
    pub fn skills_visible(&self) -> bool {
        *self == FormMode::Skills
    }

    pub fn resume_visible(&self) -> bool {
        *self == FormMode::Resume
    }
}
