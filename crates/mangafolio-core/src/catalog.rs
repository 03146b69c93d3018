//! Project catalog: the static, in-memory list of project records.
//!
//! The catalog is built once (from the seeded records or a JSON file) and
//! is read-only afterwards. Lookups that miss are ordinary outcomes and
//! return `None`; callers hide the affordance or redirect.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{ProjectId, ProjectRecord};

mod seed;

/// Title shown for a neighbour link whose record is missing.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Number of projects shown in the home page showcase.
pub const FEATURED_LIMIT: usize = 4;

/// Link to the previous or next project on a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub id: ProjectId,
    /// Resolved title, or [`UNKNOWN_TITLE`] when no record has this id
    pub title: String,
}

/// Previous/next affordances for a detail page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<Neighbor>,
    pub next: Option<Neighbor>,
}

/// Ordered, immutable collection of project records
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Catalog with the six built-in projects.
    pub fn seeded() -> Self {
        Self {
            records: seed::records(),
        }
    }

    /// Build a catalog from records, keeping their order.
    ///
    /// Ids must be unique. Gaps are allowed but logged, since previous/next
    /// navigation will then show an unknown neighbour.
    pub fn from_records(records: Vec<ProjectRecord>) -> PortfolioResult<Self> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if record.id.get() == 0 {
                return Err(PortfolioError::InvalidCatalog(
                    "project ids start at 1".to_string(),
                ));
            }
            if !seen.insert(record.id) {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "duplicate project id {}",
                    record.id
                )));
            }
        }

        let catalog = Self { records };
        if !catalog.is_dense() {
            warn!(
                count = catalog.len(),
                "Catalog ids are not dense from 1; previous/next links may show unknown projects"
            );
        }
        Ok(catalog)
    }

    /// Parse a JSON array of project records.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)
            .map_err(|e| PortfolioError::Serialization(e.to_string()))?;
        Self::from_records(records)
    }

    /// Load a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Loading project catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Whether ids run 1..=N in catalog order.
    pub fn is_dense(&self) -> bool {
        self.records
            .iter()
            .enumerate()
            .all(|(i, r)| r.id.get() as usize == i + 1)
    }

    /// Look up a record by id.
    pub fn get_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up a record by id, turning a miss into `ProjectNotFound`.
    pub fn require(&self, id: ProjectId) -> PortfolioResult<&ProjectRecord> {
        self.get_by_id(id)
            .ok_or(PortfolioError::ProjectNotFound(id.get()))
    }

    /// Records using `technology`, or every record when no filter is set.
    ///
    /// Matching is exact and case-sensitive; order follows the catalog.
    pub fn filter_by_technology(&self, technology: Option<&str>) -> Vec<&ProjectRecord> {
        match technology {
            None => self.records.iter().collect(),
            Some(tag) => self.records.iter().filter(|r| r.uses(tag)).collect(),
        }
    }

    /// Sorted, deduplicated union of every record's technologies.
    pub fn distinct_technologies(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.technologies.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Other records sharing at least one technology with `record`.
    pub fn related_to(&self, record: &ProjectRecord, max_count: usize) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|r| r.id != record.id && r.shares_technology_with(record))
            .take(max_count)
            .collect()
    }

    /// First `limit` records, for the home page showcase.
    pub fn featured(&self, limit: usize) -> &[ProjectRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    /// Previous/next links for the detail page of `id`.
    ///
    /// The previous link exists for any id above 1 and the next link for
    /// any id below the catalog length, whether or not the neighbouring
    /// record is actually present.
    pub fn neighbors(&self, id: ProjectId, hacker_mode: bool) -> Neighbors {
        let link = |neighbor_id: ProjectId| Neighbor {
            id: neighbor_id,
            title: self
                .get_by_id(neighbor_id)
                .map(|r| r.title.resolve(hacker_mode).to_string())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        };

        let previous = id.previous().map(link);
        let next = if (id.get() as usize) < self.len() {
            id.next().map(link)
        } else {
            None
        };

        Neighbors { previous, next }
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_seeded_catalog_is_dense() {
        let catalog = ProjectCatalog::seeded();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.is_dense());
    }

    #[test]
    fn test_get_by_id_hits_and_misses() {
        let catalog = ProjectCatalog::seeded();
        for id in 1..=6 {
            assert_eq!(catalog.get_by_id(ProjectId(id)).unwrap().id, ProjectId(id));
        }
        assert!(catalog.get_by_id(ProjectId(0)).is_none());
        assert!(catalog.get_by_id(ProjectId(7)).is_none());
        assert!(matches!(
            catalog.require(ProjectId(7)),
            Err(PortfolioError::ProjectNotFound(7))
        ));
    }

    #[test]
    fn test_filter_none_returns_everything_in_order() {
        let catalog = ProjectCatalog::seeded();
        assert_eq!(ids(&catalog.filter_by_technology(None)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_is_exact_match() {
        let catalog = ProjectCatalog::seeded();
        // "React Native" on record 6 does not count as "React"
        assert_eq!(
            ids(&catalog.filter_by_technology(Some("React"))),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(ids(&catalog.filter_by_technology(Some("React Native"))), vec![6]);
        assert!(catalog.filter_by_technology(Some("react")).is_empty());
    }

    #[test]
    fn test_distinct_technologies_sorted() {
        let catalog = ProjectCatalog::seeded();
        let techs = catalog.distinct_technologies();
        let mut sorted = techs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(techs, sorted);
        assert!(techs.contains(&"Firebase".to_string()));
        assert_eq!(techs.iter().filter(|t| *t == "React").count(), 1);
    }

    #[test]
    fn test_related_projects() {
        let catalog = ProjectCatalog::seeded();
        let six = catalog.get_by_id(ProjectId(6)).unwrap();
        // Shares Firebase with 3 only
        assert_eq!(ids(&catalog.related_to(six, 3)), vec![3]);

        let one = catalog.get_by_id(ProjectId(1)).unwrap();
        assert_eq!(ids(&catalog.related_to(one, 2)), vec![2, 3]);
        assert!(catalog.related_to(one, 0).is_empty());
    }

    #[test]
    fn test_featured_is_clamped() {
        let catalog = ProjectCatalog::seeded();
        assert_eq!(catalog.featured(FEATURED_LIMIT).len(), 4);
        assert_eq!(catalog.featured(100).len(), 6);
    }

    #[test]
    fn test_neighbors_at_edges() {
        let catalog = ProjectCatalog::seeded();

        let first = catalog.neighbors(ProjectId(1), false);
        assert!(first.previous.is_none());
        assert_eq!(first.next.unwrap().title, "3D Portfolio Experience");

        let last = catalog.neighbors(ProjectId(6), true);
        assert_eq!(last.previous.unwrap().title, "IoT Control Node");
        assert!(last.next.is_none());
    }

    #[test]
    fn test_neighbors_with_gap_show_unknown() {
        let mut records = ProjectCatalog::seeded().all().to_vec();
        records.remove(2); // drop id 3
        let catalog = ProjectCatalog::from_records(records).unwrap();
        assert!(!catalog.is_dense());

        let n = catalog.neighbors(ProjectId(4), false);
        assert_eq!(n.previous.unwrap().title, UNKNOWN_TITLE);
        assert_eq!(n.next.unwrap().id, ProjectId(5));
    }

    #[test]
    fn test_from_records_rejects_duplicates_and_zero() {
        let mut records = ProjectCatalog::seeded().all().to_vec();
        records[1].id = ProjectId(1);
        assert!(matches!(
            ProjectCatalog::from_records(records),
            Err(PortfolioError::InvalidCatalog(_))
        ));

        let mut records = ProjectCatalog::seeded().all().to_vec();
        records[0].id = ProjectId(0);
        assert!(ProjectCatalog::from_records(records).is_err());
    }

    #[test]
    fn test_json_catalog() {
        let json = serde_json::to_string(ProjectCatalog::seeded().all()).unwrap();
        let catalog = ProjectCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 6);

        assert!(matches!(
            ProjectCatalog::from_json("not json"),
            Err(PortfolioError::Serialization(_))
        ));
    }
}
