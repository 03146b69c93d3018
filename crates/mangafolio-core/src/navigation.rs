//! Page-level navigation: section tracking plus the hacker-mode switch.

use tracing::{debug, info};

use crate::content::ThemedText;
use crate::hacker_mode::{HackerMode, ModeChanged};
use crate::secret_code::SequenceDetector;
use crate::section::{IntersectionEvent, ScrollCommand, Section, SectionTracker};

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub section: Section,
    pub label: String,
    pub active: bool,
}

/// Label for a section's navigation button.
pub fn section_label(section: Section) -> ThemedText {
    match section {
        Section::Home => ThemedText::new("Home", "ROOT"),
        Section::About => ThemedText::new("Character", "PROFILE"),
        Section::Projects => ThemedText::new("Adventures", "MISSIONS"),
        Section::Contact => ThemedText::new("Connect", "UPLINK"),
    }
}

/// Composes the section tracker, the hacker-mode flag and the secret code.
#[derive(Debug, Clone)]
pub struct NavigationController {
    tracker: SectionTracker,
    mode: HackerMode,
    secret: SequenceDetector,
}

impl NavigationController {
    pub fn new(mode: HackerMode) -> Self {
        Self::with_parts(mode, SectionTracker::new(), SequenceDetector::konami())
    }

    pub fn with_parts(mode: HackerMode, tracker: SectionTracker, secret: SequenceDetector) -> Self {
        Self {
            tracker,
            mode,
            secret,
        }
    }

    pub fn current_section(&self) -> Section {
        self.tracker.current()
    }

    pub fn hacker_mode(&self) -> &HackerMode {
        &self.mode
    }

    pub fn tracker_mut(&mut self) -> &mut SectionTracker {
        &mut self.tracker
    }

    /// Scroll target for a navigation click. `current_section` is left alone.
    pub fn request_navigate(&self, section: Section) -> ScrollCommand {
        debug!(%section, "Navigation requested");
        self.tracker.request_navigate(section)
    }

    pub fn on_scroll(&mut self, scroll: f64) -> Option<Section> {
        let changed = self.tracker.update_scroll(scroll);
        if let Some(section) = changed {
            debug!(%section, scroll, "Current section changed");
        }
        changed
    }

    pub fn on_intersections(&mut self, events: &[IntersectionEvent]) -> Option<Section> {
        self.tracker.observe(events)
    }

    /// Feed a key press to the secret-code detector.
    ///
    /// Returns the mode change when the key completed the sequence.
    pub fn on_key(&mut self, key: &str) -> Option<ModeChanged> {
        if !self.secret.feed(key) {
            return None;
        }
        let enabled = self.mode.toggle();
        info!(enabled, "Secret code entered");
        Some(ModeChanged { enabled })
    }

    /// Navigation bar entries for the current mode and section.
    pub fn nav_items(&self) -> Vec<NavItem> {
        let hacker = self.mode.is_enabled();
        let current = self.current_section();
        Section::ALL
            .iter()
            .map(|&section| NavItem {
                section,
                label: section_label(section).resolve(hacker).to_string(),
                active: section == current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret_code::KONAMI_CODE;
    use crate::storage::MemoryPreferences;
    use std::sync::Arc;

    fn controller() -> NavigationController {
        NavigationController::new(HackerMode::load(Arc::new(MemoryPreferences::new())))
    }

    #[test]
    fn test_secret_code_toggles_mode() {
        let mut nav = controller();
        let mut changes = Vec::new();
        for key in KONAMI_CODE {
            if let Some(change) = nav.on_key(key) {
                changes.push(change);
            }
        }
        assert_eq!(changes, vec![ModeChanged { enabled: true }]);
        assert!(nav.hacker_mode().is_enabled());
    }

    #[test]
    fn test_nav_items_follow_mode_and_section() {
        let mut nav = controller();
        nav.tracker_mut().set_offsets(&[(Section::About, 500.0)]);
        nav.on_scroll(450.0);

        let items = nav.nav_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].label, "Character");
        assert!(items[1].active);
        assert!(!items[0].active);

        nav.hacker_mode().set(true);
        assert_eq!(nav.nav_items()[2].label, "MISSIONS");
    }

    #[test]
    fn test_request_navigate_keeps_current() {
        let mut nav = controller();
        nav.tracker_mut().set_offsets(&[(Section::Contact, 3000.0)]);
        let cmd = nav.request_navigate(Section::Contact);
        assert_eq!(cmd.top, 3000.0);
        assert_eq!(nav.current_section(), Section::Home);
    }
}
