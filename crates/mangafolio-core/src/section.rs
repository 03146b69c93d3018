//! Section tracking for the single-page layout.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Section: fixed, ordered page regions            │
//! │  ├── Home      (hero)                            │
//! │  ├── About     (character select)                │
//! │  ├── Projects  (showcase)                        │
//! │  └── Contact   (form)                            │
//! │                                                  │
//! │  SectionTracker: observed position               │
//! │  ├── update_scroll(): offset-based               │
//! │  ├── observe(): viewport-intersection based      │
//! │  └── request_navigate(): intent, never mutates   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Navigation intent and observed position are kept apart: a navigation
//! request only yields a [`ScrollCommand`], and `current` follows whatever
//! scroll position actually results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Margin (px) by which a section counts as current before reaching the top.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Minimum visible fraction for an intersection event to select a section.
pub const COVERAGE_THRESHOLD: f64 = 0.5;

/// Named page regions, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Short identifier, e.g. `"projects"`.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// DOM id of the section element.
    pub fn element_id(&self) -> String {
        format!("{}-section", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Viewport-intersection report for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEvent {
    pub section: Section,
    pub intersecting: bool,
    /// Visible fraction of the section, 0.0..=1.0
    pub ratio: f64,
}

/// Where the host should scroll to show a section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollCommand {
    pub section: Section,
    /// Target scroll offset (px)
    pub top: f64,
}

/// Derives the current section from scroll offsets or intersection events
#[derive(Debug, Clone)]
pub struct SectionTracker {
    /// Sections in page order with their top offset, `None` until measured
    offsets: Vec<(Section, Option<f64>)>,
    threshold: f64,
    current: Section,
}

impl SectionTracker {
    /// Tracker over all sections. Only the first section has a known
    /// offset (0) until [`set_offsets`](Self::set_offsets) is called.
    pub fn new() -> Self {
        Self {
            offsets: Section::ALL
                .iter()
                .enumerate()
                .map(|(i, &s)| (s, (i == 0).then_some(0.0)))
                .collect(),
            threshold: SCROLL_THRESHOLD,
            current: Section::Home,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Record measured offsets. Sections not listed keep their old offset.
    pub fn set_offsets(&mut self, measured: &[(Section, f64)]) {
        for (section, top) in measured {
            if let Some(entry) = self.offsets.iter_mut().find(|(s, _)| s == section) {
                entry.1 = top.is_finite().then_some(*top);
            }
        }
    }

    pub fn offset_of(&self, section: Section) -> Option<f64> {
        self.offsets
            .iter()
            .find(|(s, _)| *s == section)
            .and_then(|(_, top)| *top)
    }

    /// Recompute from a scroll offset. Returns the new section if it changed.
    ///
    /// The last section (in page order) whose top is within `threshold` of
    /// the scroll position wins; before any of them, the first section.
    pub fn update_scroll(&mut self, scroll: f64) -> Option<Section> {
        let next = self
            .offsets
            .iter()
            .filter(|(_, top)| matches!(top, Some(top) if scroll >= top - self.threshold))
            .map(|(s, _)| *s)
            .last()
            .unwrap_or_else(|| self.first());
        self.replace(next)
    }

    /// Apply intersection events. The last qualifying event wins.
    pub fn observe(&mut self, events: &[IntersectionEvent]) -> Option<Section> {
        let next = events
            .iter()
            .filter(|e| e.intersecting && e.ratio >= COVERAGE_THRESHOLD)
            .map(|e| e.section)
            .last()?;
        self.replace(next)
    }

    /// Scroll target for `section`. Does not change `current`.
    pub fn request_navigate(&self, section: Section) -> ScrollCommand {
        let top = match section {
            Section::Home => 0.0,
            other => self.offset_of(other).unwrap_or(0.0),
        };
        ScrollCommand { section, top }
    }

    fn first(&self) -> Section {
        self.offsets
            .first()
            .map(|(s, _)| *s)
            .unwrap_or_default()
    }

    fn replace(&mut self, next: Section) -> Option<Section> {
        if next == self.current {
            None
        } else {
            self.current = next;
            Some(next)
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
