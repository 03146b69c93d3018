//! Mangafolio UI Components
//!
//! Dioxus components for the manga-panel look of the portfolio.
//!
//! ## Design Philosophy
//!
//! Every surface reads like a page of a comic:
//! - **Ink Black (#111111)**: Panel borders, body text
//! - **Paper (#fdfbf7)**: Page background
//! - **Accent Red (#e63946)**: Calls to action, the active section
//! - **Terminal Green (#00ff41)**: Everything in hacker mode
//!
//! Components take an explicit `hacker_mode` flag where their look
//! changes, rather than reading global state.

pub mod components;

pub use components::*;
