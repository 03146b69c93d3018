//! Visual theme: palette and global stylesheet.

mod colors;
mod styles;

pub use colors::{css_variables, WINDOW_BACKGROUND};
pub use styles::GLOBAL_STYLES;
