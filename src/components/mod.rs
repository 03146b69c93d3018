//! Page sections and widgets for Mangafolio.
//!
//! Generic, stateless pieces live in `mangafolio-ui`; these components read
//! app context (catalog, hacker mode, toasts) directly.

mod about;
mod contact_section;
mod gallery_viewer;
mod hero;
mod loading_screen;
mod nav_bar;
mod project_card;
mod showcase;

pub use about::About;
pub use contact_section::ContactSection;
pub use gallery_viewer::GalleryViewer;
pub use hero::Hero;
pub use loading_screen::LoadingScreen;
pub use nav_bar::NavBar;
pub use project_card::ProjectCard;
pub use showcase::Showcase;
