//! Page components for Mangafolio.

mod all_projects;
mod index;
mod project_details;

pub use all_projects::AllProjects;
pub use index::Index;
pub use project_details::ProjectDetails;
