//! Reusable UI components
//!
//! All components use the manga-panel aesthetic with:
//! - Bangers for titles and speech bubbles
//! - Comic Neue for body text
//! - Share Tech Mono for hacker mode

mod button;
mod input;
mod mode_badge;
mod progress_bar;
mod speech_bubble;
mod tech_pills;
mod toast;

pub use button::*;
pub use input::*;
pub use mode_badge::*;
pub use progress_bar::*;
pub use speech_bubble::*;
pub use tech_pills::*;
pub use toast::*;
