//! "Load more" pagination over the client-held project list.

use tracing::{debug, error};

use crate::catalog::cards::{CardContainer, ProjectCard};
use crate::catalog::CatalogError;
use crate::models::project::Project;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Offset of the next project to render. Always within `0..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    pub fn new(position: usize, len: usize) -> Self {
        Cursor(position.min(len))
    }

    pub fn position(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub rendered: usize,
    pub cursor: Cursor,
    pub exhausted: bool,
}

/// Renders the next page of `full_list` into `container` and returns the advanced cursor.
///
/// Rendering and cursor advance happen together: calling this twice with the
/// same cursor renders the same page twice.
pub fn load_more(
    full_list: &[Project],
    cursor: Cursor,
    page_size: usize,
    container: &mut CardContainer,
) -> LoadOutcome {
    let start = cursor.position().min(full_list.len());
    let end = start.saturating_add(page_size.max(1)).min(full_list.len());
    let page = &full_list[start..end];

    for project in page {
        container.append(ProjectCard::from_project(project));
    }

    let cursor = Cursor::new(end, full_list.len());
    let exhausted = cursor.position() >= full_list.len();
    if exhausted {
        container.set_load_more_visible(false);
    }

    debug!(
        rendered = page.len(),
        cursor = cursor.position(),
        total = full_list.len(),
        "Loaded project page"
    );

    LoadOutcome {
        rendered: page.len(),
        cursor,
        exhausted,
    }
}

/// Owns the full project list and the cursor into it.
#[derive(Debug, Clone)]
pub struct ProjectPager {
    projects: Option<Vec<Project>>,
    cursor: Cursor,
    page_size: usize,
}

impl ProjectPager {
    /// `initial` is the number of cards the server already rendered.
    pub fn new(projects: Option<Vec<Project>>, initial: usize, page_size: usize) -> Self {
        let len = projects.as_ref().map_or(0, Vec::len);
        Self {
            projects,
            cursor: Cursor::new(initial, len),
            page_size,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn total(&self) -> Option<usize> {
        self.projects.as_ref().map(Vec::len)
    }

    pub fn has_more(&self) -> bool {
        self.total()
            .is_some_and(|total| self.cursor.position() < total)
    }

    pub fn load_more(&mut self, container: &mut CardContainer) -> Result<LoadOutcome, CatalogError> {
        let Some(projects) = self.projects.as_deref() else {
            error!("Load more requested but no project list was provided");
            return Err(CatalogError::ProjectsUnavailable);
        };

        let outcome = load_more(projects, self.cursor, self.page_size, container);
        self.cursor = outcome.cursor;
        Ok(outcome)
    }
}
