// Project list rendering: server-rendered cards, "load more" pagination,
// and the level selector buttons every card carries.

pub mod cards;
pub mod pager;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project list is not available on this page")]
    ProjectsUnavailable,
}
