//! Validation for the `/project/:id` route.

use std::time::Duration;

use tracing::debug;

use crate::catalog::ProjectCatalog;
use crate::error::PortfolioError;
use crate::types::ProjectId;

/// Simulated load time before a detail page shows its record.
pub const DETAIL_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Outcome of resolving a detail-page route parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRoute {
    /// Render the detail page for this project
    Show(ProjectId),
    /// Send the reader back to the `/projects` listing
    RedirectToCatalog,
}

/// Parse a raw `:id` segment as a positive integer.
pub fn parse_project_id(raw: &str) -> Result<ProjectId, PortfolioError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(PortfolioError::InvalidRoute(format!(
            "project id must be a positive integer, got {:?}",
            raw
        ))),
        Ok(id) => Ok(ProjectId(id)),
    }
}

/// Decide what `/project/:id` shows.
///
/// Anything that isn't the id of a catalog record redirects.
pub fn resolve_project_route(raw: &str, catalog: &ProjectCatalog) -> ProjectRoute {
    let id = match parse_project_id(raw) {
        Ok(id) => id,
        Err(e) => {
            debug!(error = %e, "Redirecting to catalog");
            return ProjectRoute::RedirectToCatalog;
        }
    };

    match catalog.require(id) {
        Ok(record) => ProjectRoute::Show(record.id),
        Err(e) => {
            debug!(error = %e, "Redirecting to catalog");
            ProjectRoute::RedirectToCatalog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids_show() {
        let catalog = ProjectCatalog::seeded();
        assert_eq!(resolve_project_route("3", &catalog), ProjectRoute::Show(ProjectId(3)));
    }

    #[test]
    fn test_invalid_ids_redirect() {
        let catalog = ProjectCatalog::seeded();
        for raw in ["7", "0", "-1", "abc", "", "3.5", "99999999999"] {
            assert_eq!(
                resolve_project_route(raw, &catalog),
                ProjectRoute::RedirectToCatalog,
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_project_id() {
        assert_eq!(parse_project_id(" 2 ").unwrap(), ProjectId(2));
        assert!(matches!(parse_project_id("0"), Err(PortfolioError::InvalidRoute(_))));
    }
}
