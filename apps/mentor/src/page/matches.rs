#![allow(dead_code)]

//! Rendering of the skills-matching service's answer.

use crate::catalog::cards::NO_SKILLS;
use crate::models::project::{MatchResponse, TopMatch};

pub const NO_MATCHES_TEXT: &str = "No projects found for the entered skills.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchView {
    Found {
        recommended: Vec<String>,
        top: Vec<TopMatchSummary>,
    },
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopMatchSummary {
    pub project: String,
    /// e.g. `Matching Skills (2): python, api`
    pub matching_line: String,
    pub missing_line: String,
}

impl From<&TopMatch> for TopMatchSummary {
    fn from(m: &TopMatch) -> Self {
        let missing = if m.missing_skills.is_empty() {
            NO_SKILLS.to_string()
        } else {
            m.missing_skills.join(", ")
        };
        Self {
            project: m.project.clone(),
            matching_line: format!(
                "Matching Skills ({}): {}",
                m.matching_count,
                m.matching_skills.join(", ")
            ),
            missing_line: format!("Missing Skills: {missing}"),
        }
    }
}

pub fn render_matches(response: &MatchResponse) -> MatchView {
    match (&response.recommended_projects, &response.top_6_projects) {
        (Some(recommended), Some(top)) if !(recommended.is_empty() && top.is_empty()) => MatchView::Found {
            recommended: recommended.clone(),
            top: top.iter().map(TopMatchSummary::from).collect(),
        },
        _ => MatchView::Empty(NO_MATCHES_TEXT),
    }
}
