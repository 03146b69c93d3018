//! Mangafolio Core Library
//!
//! View and session state for a manga-themed single-page portfolio.
//!
//! ## Overview
//!
//! Everything the site does is presentation, except for a small set of
//! state machines that decide *what* gets presented:
//!
//! - **Catalog**: the static list of project records, filtering and lookup
//! - **Gallery cursor**: wrapping image index for a project's gallery
//! - **Hacker mode**: one persisted boolean with subscribe/notify
//! - **Secret code**: sliding-window detector that toggles hacker mode
//! - **Sections**: which page region the reader is looking at
//! - **Loading gate**: one-shot progress gate in front of the page
//!
//! ## Quick Start
//!
//! ```ignore
//! use mangafolio_core::{HackerMode, MemoryPreferences, ProjectCatalog, SequenceDetector};
//! use std::sync::Arc;
//!
//! let catalog = ProjectCatalog::seeded();
//! let mode = HackerMode::load(Arc::new(MemoryPreferences::new()));
//! let mut konami = SequenceDetector::konami();
//!
//! for key in ["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
//!             "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight", "b", "a"] {
//!     if konami.feed(key) {
//!         mode.toggle();
//!     }
//! }
//!
//! for project in catalog.filter_by_technology(Some("React")) {
//!     println!("{}", project.title.resolve(mode.is_enabled()));
//! }
//! ```

pub mod catalog;
pub mod character;
pub mod contact;
pub mod content;
pub mod error;
pub mod gallery;
pub mod hacker_mode;
pub mod loading;
pub mod navigation;
pub mod peripherals;
pub mod progress;
pub mod route;
pub mod secret_code;
pub mod section;
pub mod storage;
pub mod types;

// Re-exports
pub use catalog::{Neighbor, Neighbors, ProjectCatalog};
pub use character::{CharacterStyle, Skill};
pub use contact::{contact_vcard, ContactField, ContactForm, SentMessage, SubmissionState, SUBMIT_DELAY};
pub use content::{resolve, Label, ThemedText};
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::GalleryCursor;
pub use hacker_mode::{HackerMode, ModeChanged, HACKER_MODE_KEY};
pub use loading::{LoadingGate, LoadingState, SETTLE_DELAY, TICK_INTERVAL};
pub use navigation::{section_label, NavItem, NavigationController};
pub use peripherals::{copy_to_clipboard, play_cue, AudioCue, ClipboardWriter, Cue, FileDownload, Notifier};
pub use progress::{experience_points, show_scroll_to_top, PowerMeter};
pub use route::{resolve_project_route, ProjectRoute, DETAIL_LOAD_DELAY};
pub use secret_code::{SequenceDetector, KONAMI_CODE};
pub use section::{IntersectionEvent, ScrollCommand, Section, SectionTracker};
pub use storage::{MemoryPreferences, PreferenceStore, Storage};
pub use types::*;
