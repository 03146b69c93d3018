//! Mode Badge Component
//!
//! Small indicator in the navigation bar showing which theme is active.
//! Clicking it toggles hacker mode, the same as entering the secret code.

use dioxus::prelude::*;

/// Visible theme
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModeState {
    /// Normal manga look
    #[default]
    Manga,
    /// Terminal look
    Hacker,
}

impl ModeState {
    pub fn from_enabled(hacker_mode: bool) -> Self {
        if hacker_mode {
            ModeState::Hacker
        } else {
            ModeState::Manga
        }
    }

    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            ModeState::Manga => "Manga Mode",
            ModeState::Hacker => "HACKER MODE",
        }
    }

    pub fn is_hacker(&self) -> bool {
        matches!(self, ModeState::Hacker)
    }
}

/// Properties for the ModeBadge component
#[derive(Clone, PartialEq, Props)]
pub struct ModeBadgeProps {
    pub status: ModeState,
    /// Called when the badge is clicked
    pub on_toggle: EventHandler<()>,
}

/// Displays the active theme with a blinking indicator in hacker mode
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ModeBadge {
///         status: ModeState::from_enabled(mode.is_enabled()),
///         on_toggle: move |_| { mode.toggle(); },
///     }
/// }
/// ```
#[component]
pub fn ModeBadge(props: ModeBadgeProps) -> Element {
    let label = props.status.label();
    let is_hacker = props.status.is_hacker();

    rsx! {
        button {
            class: if is_hacker { "mode-badge hacker" } else { "mode-badge" },
            "aria-pressed": if is_hacker { "true" } else { "false" },
            onclick: move |_| {
                tracing::debug!(from = ?props.status, "Mode badge clicked");
                props.on_toggle.call(());
            },
            span {
                class: if is_hacker { "mode-dot blinking" } else { "mode-dot" },
                role: "img",
                "aria-label": if is_hacker { "Hacker mode on" } else { "Hacker mode off" },
            }
            span { class: "mode-label", "{label}" }
        }
    }
}
