//! Core types for Mangafolio

use serde::{Deserialize, Serialize};

use crate::content::ThemedText;

/// Identifier of a project record.
///
/// Ids are dense from 1; previous/next navigation relies on `id - 1` and
/// `id + 1` naming real records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Id immediately before this one, if it can exist.
    pub fn previous(self) -> Option<ProjectId> {
        self.0.checked_sub(1).filter(|&id| id > 0).map(ProjectId)
    }

    /// Id immediately after this one.
    pub fn next(self) -> Option<ProjectId> {
        self.0.checked_add(1).map(ProjectId)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External links for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Deployed site
    pub live: String,
    /// Source repository
    pub code: String,
}

/// A single project in the showcase.
///
/// Records are created once when the catalog is built and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: ThemedText,
    pub description: ThemedText,
    pub details: ThemedText,
    pub challenges: ThemedText,
    pub solutions: ThemedText,
    /// Cover image
    pub image: String,
    /// Technology tags, in display order
    pub technologies: Vec<String>,
    /// Screenshot URLs, possibly empty
    #[serde(default)]
    pub gallery: Vec<String>,
    pub links: ProjectLinks,
}

impl ProjectRecord {
    /// Exact, case-sensitive tag membership.
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }

    /// Whether this record shares at least one tag with `other`.
    pub fn shares_technology_with(&self, other: &ProjectRecord) -> bool {
        self.technologies.iter().any(|t| other.uses(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_neighbours() {
        assert_eq!(ProjectId(1).previous(), None);
        assert_eq!(ProjectId(2).previous(), Some(ProjectId(1)));
        assert_eq!(ProjectId(0).previous(), None);
        assert_eq!(ProjectId(6).next(), Some(ProjectId(7)));
        assert_eq!(ProjectId(u32::MAX).next(), None);
    }

    #[test]
    fn test_project_id_display() {
        assert_eq!(ProjectId(3).to_string(), "3");
    }
}
