//! Edge case and boundary condition tests
//!
//! These tests verify the state machines handle missing records, empty
//! galleries, sparse catalogs and odd input the way the views expect.

use std::sync::Arc;

use mangafolio_core::{
    resolve_project_route, ContactField, ContactForm, GalleryCursor, HackerMode, IntersectionEvent,
    LoadingGate, LoadingState, MemoryPreferences, PortfolioError, PreferenceStore, ProjectCatalog,
    ProjectId, ProjectLinks, ProjectRecord, ProjectRoute, Section, SectionTracker,
    SequenceDetector, ThemedText, HACKER_MODE_KEY,
};

fn record(id: u32, title: &str, technologies: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId(id),
        title: ThemedText::plain(title),
        description: ThemedText::plain("desc"),
        details: ThemedText::plain("details"),
        challenges: ThemedText::plain("challenges"),
        solutions: ThemedText::plain("solutions"),
        image: "cover.png".to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        gallery: Vec::new(),
        links: ProjectLinks {
            live: "https://example.com".to_string(),
            code: "https://github.com".to_string(),
        },
    }
}

// ============================================================================
// Catalog Boundaries
// ============================================================================

/// First and last projects only get one neighbour link
#[test]
fn test_neighbors_at_catalog_ends() {
    let catalog = ProjectCatalog::seeded();

    let first = catalog.neighbors(ProjectId(1), false);
    assert!(first.previous.is_none());
    assert_eq!(first.next.unwrap().id, ProjectId(2));

    let last = catalog.neighbors(ProjectId(6), false);
    assert_eq!(last.previous.unwrap().id, ProjectId(5));
    assert!(last.next.is_none());
}

/// A gap in the ids still produces a link, titled "Unknown"
#[test]
fn test_sparse_catalog_neighbor_is_unknown() {
    let catalog = ProjectCatalog::from_records(vec![
        record(1, "One", &["Rust"]),
        record(3, "Three", &["Rust"]),
        record(4, "Four", &["Go"]),
    ])
    .unwrap();
    assert!(!catalog.is_dense());

    let neighbors = catalog.neighbors(ProjectId(1), false);
    let next = neighbors.next.unwrap();
    assert_eq!(next.id, ProjectId(2));
    assert_eq!(next.title, "Unknown");

    assert_eq!(resolve_project_route("2", &catalog), ProjectRoute::RedirectToCatalog);
}

/// Duplicate and zero ids are rejected when building a catalog
#[test]
fn test_invalid_catalogs_rejected() {
    let duplicate = ProjectCatalog::from_records(vec![record(1, "A", &[]), record(1, "B", &[])]);
    assert!(matches!(duplicate, Err(PortfolioError::InvalidCatalog(_))));

    let zero = ProjectCatalog::from_records(vec![record(0, "Zero", &[])]);
    assert!(matches!(zero, Err(PortfolioError::InvalidCatalog(_))));
}

/// Empty catalog: no records, no technologies, nothing to show
#[test]
fn test_empty_catalog() {
    let catalog = ProjectCatalog::from_records(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.distinct_technologies().is_empty());
    assert!(catalog.featured(4).is_empty());
    assert!(catalog.filter_by_technology(None).is_empty());
    assert_eq!(resolve_project_route("1", &catalog), ProjectRoute::RedirectToCatalog);
}

/// Case and whitespace variants of a tag match nothing
#[test]
fn test_filter_is_case_sensitive() {
    let catalog = ProjectCatalog::seeded();
    assert!(catalog.filter_by_technology(Some("react")).is_empty());
    assert!(catalog.filter_by_technology(Some(" React")).is_empty());
    assert!(catalog.filter_by_technology(Some("")).is_empty());
    assert_eq!(catalog.filter_by_technology(None).len(), catalog.len());
}

/// "React Native" is its own tag, not a React match
#[test]
fn test_react_native_is_distinct_tag() {
    let catalog = ProjectCatalog::seeded();
    let react = catalog.filter_by_technology(Some("React"));
    assert!(react.iter().all(|r| r.id != ProjectId(6)));
    assert!(catalog.distinct_technologies().contains(&"React Native".to_string()));
}

/// Malformed JSON catalogs surface as serialization errors
#[test]
fn test_bad_json_catalog() {
    let result = ProjectCatalog::from_json("{ not json");
    assert!(matches!(result, Err(PortfolioError::Serialization(_))));
}

/// Missing catalog file surfaces as an IO error
#[test]
fn test_missing_catalog_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let result = ProjectCatalog::from_path(temp_dir.path().join("nope.json"));
    assert!(matches!(result, Err(PortfolioError::Io(_))));
}

// ============================================================================
// Gallery Boundaries
// ============================================================================

/// Empty gallery: nothing current, controls hidden, moves are no-ops
#[test]
fn test_empty_gallery() {
    let mut cursor = GalleryCursor::new(0);
    cursor.next();
    cursor.prev();
    assert_eq!(cursor.index(), 0);
    assert!(!cursor.can_navigate());
    assert!(cursor.position().is_none());
    assert!(cursor.current(&[]).is_none());
    assert!(!cursor.jump_to(0));
}

/// Single image: always index 0
#[test]
fn test_single_image_gallery() {
    let gallery = vec!["only.png".to_string()];
    let mut cursor = GalleryCursor::new(1);
    cursor.next();
    cursor.prev();
    assert_eq!(cursor.current(&gallery), Some("only.png"));
    assert_eq!(cursor.position(), Some((1, 1)));
}

/// Previous from the first image wraps to the last
#[test]
fn test_prev_wraps_to_last() {
    let mut cursor = GalleryCursor::new(3);
    cursor.prev();
    assert_eq!(cursor.index(), 2);
}

// ============================================================================
// Secret Code & Hacker Mode
// ============================================================================

/// One wrong key in the middle breaks the sequence
#[test]
fn test_interrupted_code_does_not_fire() {
    let mut detector = SequenceDetector::konami();
    let keys = [
        "ArrowUp", "ArrowUp", "ArrowDown", "Enter", "ArrowDown", "ArrowLeft", "ArrowRight",
        "ArrowLeft", "ArrowRight", "b", "a",
    ];
    assert!(!keys.iter().any(|k| detector.feed(k)));
}

/// Extra leading keys don't prevent the match
#[test]
fn test_code_after_noise_fires() {
    let mut detector = SequenceDetector::konami();
    for key in ["x", "ArrowUp", "ArrowUp", "ArrowUp"] {
        assert!(!detector.feed(key));
    }
    let rest = [
        "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight", "b",
    ];
    for key in rest {
        assert!(!detector.feed(key));
    }
    assert!(detector.feed("a"));
}

/// Empty target never matches
#[test]
fn test_empty_detector_never_fires() {
    let mut detector = SequenceDetector::new(Vec::<String>::new());
    assert!(!detector.feed(""));
    assert!(!detector.feed("a"));
}

/// Toggling twice leaves "false" in the store
#[test]
fn test_double_toggle_persists_false() {
    let store = Arc::new(MemoryPreferences::new());
    let mode = HackerMode::load(store.clone());
    assert!(mode.toggle());
    assert!(!mode.toggle());
    assert_eq!(store.get(HACKER_MODE_KEY).unwrap().as_deref(), Some("false"));
}

/// Setting the current value persists but doesn't notify
#[test]
fn test_set_same_value_is_silent() {
    let store = Arc::new(MemoryPreferences::with(HACKER_MODE_KEY, "true"));
    let mode = HackerMode::load(store);
    let mut rx = mode.subscribe();
    mode.set(true);
    assert!(rx.try_recv().is_err());
    mode.set(false);
    assert!(!rx.try_recv().unwrap().enabled);
}

// ============================================================================
// Sections, Loading, Contact
// ============================================================================

/// Scrolling above the page keeps the first section
#[test]
fn test_negative_scroll_is_home() {
    let mut tracker = SectionTracker::new();
    tracker.set_offsets(&[(Section::About, 800.0)]);
    tracker.update_scroll(900.0);
    assert_eq!(tracker.update_scroll(-50.0), Some(Section::Home));
}

/// Events below the coverage threshold are ignored
#[test]
fn test_low_coverage_intersections_ignored() {
    let mut tracker = SectionTracker::new();
    let events = [
        IntersectionEvent { section: Section::About, intersecting: true, ratio: 0.2 },
        IntersectionEvent { section: Section::Contact, intersecting: false, ratio: 0.9 },
    ];
    assert_eq!(tracker.observe(&events), None);
    assert_eq!(tracker.current(), Section::Home);
}

/// Non-finite offsets are treated as unmeasured
#[test]
fn test_nan_offset_ignored() {
    let mut tracker = SectionTracker::new();
    tracker.set_offsets(&[(Section::About, f64::NAN)]);
    assert_eq!(tracker.offset_of(Section::About), None);
    assert_eq!(tracker.request_navigate(Section::About).top, 0.0);
}

/// Ready is terminal: neither ticks nor settles move it
#[test]
fn test_ready_gate_is_terminal() {
    let mut gate = LoadingGate::new();
    gate.settle();
    assert_eq!(gate.state(), LoadingState::Loading);

    while gate.is_loading() {
        gate.advance(200);
    }
    gate.settle();
    assert_eq!(gate.advance(5), LoadingState::Ready);
    assert_eq!(gate.progress(), 100);
}

/// Zero increment still moves the bar
#[test]
fn test_zero_increment_clamped() {
    let mut gate = LoadingGate::new();
    gate.advance(0);
    assert_eq!(gate.progress(), 1);
}

/// Whitespace-only fields fail validation
#[test]
fn test_whitespace_contact_fields() {
    let mut form = ContactForm::new();
    form.set(ContactField::Name, "  ");
    form.set(ContactField::Email, "a@b");
    form.set(ContactField::Message, "hi");
    assert!(matches!(form.validate(), Err(PortfolioError::InvalidContactForm(_))));
}
