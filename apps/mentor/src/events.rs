//! Click delegation between the rendered page and its root listener.
//!
//! Elements never carry their own handlers. Each one exposes a structural
//! [`ElementTag`] and, for level selectors, a typed [`LevelSelection`]; the page
//! root matches on those alone, so a card appended by "load more" is handled
//! exactly like one rendered with the page.

use serde::{Deserialize, Serialize};

use crate::models::project::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementTag {
    LevelSelector,
    LoadMore,
    ToggleSize,
    CloseChat,
}

/// Everything the chat needs to know about the card a level button sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSelection {
    pub project_name: String,
    pub level: Level,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// A click as seen by the root listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub tag: ElementTag,
    pub selection: Option<LevelSelection>,
}

impl Click {
    pub fn on(tag: ElementTag) -> Self {
        Self {
            tag,
            selection: None,
        }
    }

    pub fn level(selection: LevelSelection) -> Self {
        Self {
            tag: ElementTag::LevelSelector,
            selection: Some(selection),
        }
    }
}

pub trait Clickable {
    fn tag(&self) -> ElementTag;

    fn click(&self) -> Click {
        Click::on(self.tag())
    }
}

/// Page-level controls that are not part of any card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    tag: ElementTag,
}

impl Control {
    pub const LOAD_MORE: Control = Control {
        tag: ElementTag::LoadMore,
    };
    pub const TOGGLE_SIZE: Control = Control {
        tag: ElementTag::ToggleSize,
    };
    pub const CLOSE_CHAT: Control = Control {
        tag: ElementTag::CloseChat,
    };
}

impl Clickable for Control {
    fn tag(&self) -> ElementTag {
        self.tag
    }
}
