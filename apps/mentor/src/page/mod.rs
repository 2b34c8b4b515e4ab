//! The recommendations page: card container, pager and chat modal behind one
//! root click listener.

pub mod forms;
pub mod matches;

use tracing::warn;

use crate::catalog::cards::{render_initial_cards, CardContainer, ProjectCard};
use crate::catalog::pager::{LoadOutcome, ProjectPager};
use crate::chat::controller::{ChatController, PendingTurn, TurnOutcome};
use crate::chat::service::ChatService;
use crate::events::{Click, ElementTag};
use crate::models::project::Project;

/// What the root listener did with a click.
#[derive(Debug)]
pub enum Dispatch {
    Ignored,
    Loaded(LoadOutcome),
    /// A chat turn was started and must be completed by the caller.
    Turn(PendingTurn),
    Resized,
    Closed,
}

pub struct Page {
    cards: CardContainer,
    pager: ProjectPager,
    chat: ChatController,
}

impl Page {
    /// Builds the page around cards the server already rendered.
    pub fn new(
        mut initial_cards: Vec<ProjectCard>,
        projects: Option<Vec<Project>>,
        page_size: usize,
    ) -> Self {
        render_initial_cards(&mut initial_cards);

        let pager = ProjectPager::new(projects, initial_cards.len(), page_size);
        let mut cards = CardContainer::new(initial_cards);
        cards.set_load_more_visible(pager.has_more());

        Self {
            cards,
            pager,
            chat: ChatController::new(),
        }
    }

    /// Server-renders the first `initial` projects, the rest stay behind "load more".
    pub fn from_projects(projects: Vec<Project>, initial: usize, page_size: usize) -> Self {
        let initial_cards = projects
            .iter()
            .take(initial)
            .map(ProjectCard::server_rendered)
            .collect();
        Self::new(initial_cards, Some(projects), page_size)
    }

    pub fn cards(&self) -> &CardContainer {
        &self.cards
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatController {
        &mut self.chat
    }

    /// The single root listener. Routes purely on the element's tag and payload.
    pub fn dispatch(&mut self, click: Click) -> Dispatch {
        match click.tag {
            ElementTag::LevelSelector => match click.selection {
                Some(selection) => Dispatch::Turn(self.chat.open_for_project(&selection)),
                None => {
                    warn!("Level selector clicked without a project payload");
                    Dispatch::Ignored
                }
            },
            ElementTag::LoadMore => match self.pager.load_more(&mut self.cards) {
                Ok(outcome) => Dispatch::Loaded(outcome),
                Err(_) => Dispatch::Ignored,
            },
            ElementTag::ToggleSize => {
                self.chat.toggle_maximize();
                Dispatch::Resized
            }
            ElementTag::CloseChat => {
                self.chat.close();
                Dispatch::Closed
            }
        }
    }

    /// Dispatches `click` and, when it starts a chat turn, completes it on `service`.
    pub async fn handle(&mut self, click: Click, service: &dyn ChatService) -> Option<TurnOutcome> {
        match self.dispatch(click) {
            Dispatch::Turn(turn) => Some(self.chat.run_turn(service, turn).await),
            _ => None,
        }
    }
}
