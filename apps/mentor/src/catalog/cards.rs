use crate::events::{Click, Clickable, ElementTag, LevelSelection};
use crate::models::project::{Level, Project};

/// Text shown in place of an empty missing-skills list.
pub const NO_SKILLS: &str = "None";

/// Separator used when a skill list is rendered as text.
const SKILL_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelButton {
    pub selection: LevelSelection,
}

impl LevelButton {
    pub fn level(&self) -> Level {
        self.selection.level
    }

    pub fn label(&self) -> &'static str {
        self.selection.level.as_str()
    }
}

impl Clickable for LevelButton {
    fn tag(&self) -> ElementTag {
        ElementTag::LevelSelector
    }

    fn click(&self) -> Click {
        Click::level(self.selection.clone())
    }
}

/// A project card as it appears in the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub matching_count: u32,
    pub matching_text: String,
    pub missing_text: String,
    pub buttons: Vec<LevelButton>,
}

impl ProjectCard {
    /// Card as the server renders it into the initial page: text only, no tagged buttons yet.
    pub fn server_rendered(project: &Project) -> Self {
        Self {
            title: project.project_name.clone(),
            matching_count: project.matching_count,
            matching_text: project.matching_skills.join(SKILL_SEPARATOR),
            missing_text: missing_text(&project.missing_skills),
            buttons: Vec::new(),
        }
    }

    /// Card built on the client for a project fetched by "load more".
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.project_name.clone(),
            matching_count: project.matching_count,
            matching_text: project.matching_skills.join(SKILL_SEPARATOR),
            missing_text: missing_text(&project.missing_skills),
            buttons: level_buttons(
                &project.project_name,
                &project.matching_skills,
                &project.missing_skills,
            ),
        }
    }

    pub fn button(&self, level: Level) -> Option<&LevelButton> {
        self.buttons.iter().find(|b| b.level() == level)
    }

    /// Re-derives the buttons from the card's displayed text.
    fn attach_level_buttons(&mut self) {
        let matching = split_skill_text(&self.matching_text);
        let missing = split_skill_text(&self.missing_text);
        self.buttons = level_buttons(&self.title, &matching, &missing);
    }
}

/// The page's card list plus the "load more" control below it.
#[derive(Debug, Clone, Default)]
pub struct CardContainer {
    cards: Vec<ProjectCard>,
    load_more_visible: bool,
}

impl CardContainer {
    pub fn new(cards: Vec<ProjectCard>) -> Self {
        Self {
            cards,
            load_more_visible: false,
        }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn append(&mut self, card: ProjectCard) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }
}

/// Attaches the three level selector buttons to each server-rendered card.
pub fn render_initial_cards(cards: &mut [ProjectCard]) {
    for card in cards.iter_mut() {
        card.attach_level_buttons();
    }
}

fn level_buttons(project_name: &str, matching: &[String], missing: &[String]) -> Vec<LevelButton> {
    Level::ALL
        .iter()
        .map(|&level| LevelButton {
            selection: LevelSelection {
                project_name: project_name.to_string(),
                level,
                matching_skills: matching.to_vec(),
                missing_skills: missing.to_vec(),
            },
        })
        .collect()
}

fn missing_text(missing: &[String]) -> String {
    if missing.is_empty() {
        NO_SKILLS.to_string()
    } else {
        missing.join(SKILL_SEPARATOR)
    }
}

/// Parses a rendered skill list back into items. `None` and blank text are empty lists.
///
/// Splits on the same separator used to render, so skills containing a bare
/// comma survive. Lossy for a lone skill literally named `None`, or one that
/// itself contains `", "`.
pub fn split_skill_text(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() || text == NO_SKILLS {
        return Vec::new();
    }
    text.split(SKILL_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
