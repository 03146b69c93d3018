//! Themed text resolution.
//!
//! Every piece of copy on the site has a normal variant and, optionally, a
//! hacker-mode variant. Views never branch on the flag themselves; they ask
//! the text to resolve.

use serde::{Deserialize, Serialize};

/// Pick the alternate text when hacker mode is on and one exists.
pub fn resolve<'a>(base: &'a str, alternate: Option<&'a str>, hacker_mode: bool) -> &'a str {
    match alternate {
        Some(alt) if hacker_mode => alt,
        _ => base,
    }
}

/// A display string with an optional hacker-mode variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedText {
    /// Normal-mode text, always present
    pub base: String,
    /// Hacker-mode text, falls back to `base` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
}

impl ThemedText {
    /// Text with both variants.
    pub fn new(base: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            alternate: Some(alternate.into()),
        }
    }

    /// Text that reads the same in both modes.
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            alternate: None,
        }
    }

    pub fn resolve(&self, hacker_mode: bool) -> &str {
        resolve(&self.base, self.alternate.as_deref(), hacker_mode)
    }
}

impl From<&str> for ThemedText {
    fn from(base: &str) -> Self {
        Self::plain(base)
    }
}

/// Fixed interface copy that changes with the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    HeroTitle,
    HeroGreeting,
    MeetTheHero,
    ViewAdventures,
    FooterBrand,
    AllProjectsTitle,
    FilterProjects,
    FilterByTechnology,
    ShowAllProjects,
    NoProjectsFound,
    BackToHome,
    BackToProjects,
    LoadingProject,
    ProjectOverview,
    ProjectGallery,
    Challenges,
    Solutions,
    LiveDemo,
    ViewCode,
    PreviousProject,
    NextProject,
}

impl Label {
    /// `(normal, hacker)` text pair.
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Label::HeroTitle => ("THE PORTFOLIO", "CYBER DIMENSION"),
            Label::HeroGreeting => (
                "Welcome to my manga-inspired portfolio! Turn the pages to discover my story, skills, and creations.",
                "Welcome to the cyber dimension. Hack into my digital portfolio to discover encrypted skills and projects.",
            ),
            Label::MeetTheHero => ("MEET THE HERO", "ACCESS PROFILE"),
            Label::ViewAdventures => ("VIEW ADVENTURES", "VIEW MISSIONS"),
            Label::FooterBrand => ("MANGA PORTFOLIO", "CYBER MANGA"),
            Label::AllProjectsTitle => ("ALL ADVENTURES & BATTLES", "ALL DIGITAL MISSIONS"),
            Label::FilterProjects => ("Filter Projects", "APPLY FILTER"),
            Label::FilterByTechnology => ("Filter by Technology", "SELECT TECHNOLOGY"),
            Label::ShowAllProjects => ("Show All Projects", "SHOW ALL MISSIONS"),
            Label::NoProjectsFound => ("No Projects Found", "NO MISSIONS FOUND"),
            Label::BackToHome => ("Back to Home", "RETURN TO MAIN"),
            Label::BackToProjects => ("Back to Projects", "BACK TO MISSIONS"),
            Label::LoadingProject => ("Loading Project...", "LOADING MISSION DATA..."),
            Label::ProjectOverview => ("Project Overview", "MISSION DETAILS"),
            Label::ProjectGallery => ("Project Gallery", "VISUAL DATA"),
            Label::Challenges => ("Challenges", "SYSTEM CHALLENGES"),
            Label::Solutions => ("Solutions", "IMPLEMENTED SOLUTIONS"),
            Label::LiveDemo => ("Live Demo", "ACCESS SYSTEM"),
            Label::ViewCode => ("View Code", "SOURCE CODE"),
            Label::PreviousProject => ("Previous Project", "PREVIOUS MISSION"),
            Label::NextProject => ("Next Project", "NEXT MISSION"),
        }
    }

    pub fn text(self, hacker_mode: bool) -> &'static str {
        let (base, alternate) = self.pair();
        resolve(base, Some(alternate), hacker_mode)
    }
}

/// Toast shown after choosing a technology filter, as `(title, body)`.
pub fn filter_toast(technology: Option<&str>, hacker_mode: bool) -> (String, String) {
    match (technology, hacker_mode) {
        (Some(tech), true) => (
            "FILTER ACTIVATED".to_string(),
            format!("SHOWING PROJECTS WITH {} TECHNOLOGY", tech.to_uppercase()),
        ),
        (Some(tech), false) => (
            "Filter Applied".to_string(),
            format!("Showing projects using {}", tech),
        ),
        (None, true) => (
            "FILTERS CLEARED".to_string(),
            "DISPLAYING ALL AVAILABLE MISSIONS".to_string(),
        ),
        (None, false) => ("All Projects".to_string(), "Showing all projects".to_string()),
    }
}

/// Message for a filter that matched nothing.
pub fn empty_filter_message(technology: &str, hacker_mode: bool) -> String {
    if hacker_mode {
        format!(
            "NO PROJECTS USING {} TECHNOLOGY FOUND IN DATABASE",
            technology.to_uppercase()
        )
    } else {
        format!("No projects using {} were found.", technology)
    }
}

/// "Image 2 of 3" caption under a gallery.
pub fn image_caption(position: usize, total: usize, hacker_mode: bool) -> String {
    if hacker_mode {
        format!("IMAGE {} OF {}", position, total)
    } else {
        format!("Image {} of {}", position, total)
    }
}

/// Placeholder shown instead of an empty gallery.
pub fn empty_gallery_message(hacker_mode: bool) -> &'static str {
    resolve(
        "No gallery images available",
        Some("NO VISUAL DATA AVAILABLE"),
        hacker_mode,
    )
}
