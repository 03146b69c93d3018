//! Fixed navigation bar for the home page.

use dioxus::prelude::*;
use mangafolio_core::{NavItem, Section};
use mangafolio_ui::{ModeBadge, ModeState};

use crate::app::Route;
use crate::context::{use_hacker_mode, use_hacker_mode_handle};

/// Navigation bar with one button per section and the mode badge.
///
/// `items` comes from the page's navigation controller, which decides the
/// labels and the active entry; clicking only requests a scroll.
#[component]
pub fn NavBar(items: Vec<NavItem>, on_navigate: EventHandler<Section>) -> Element {
    let hacker = use_hacker_mode();
    let mode = use_hacker_mode_handle();
    let mut menu_open = use_signal(|| false);

    let buttons = items.into_iter().map(|item| {
        let section = item.section;
        rsx! {
            li { key: "{section}",
                button {
                    class: if item.active { "nav-link active" } else { "nav-link" },
                    "aria-current": if item.active { "true" } else { "false" },
                    onclick: move |_| {
                        menu_open.set(false);
                        on_navigate.call(section);
                    },
                    "{item.label}"
                }
            }
        }
    });

    rsx! {
        nav { class: if menu_open() { "nav-bar open" } else { "nav-bar" },
            button {
                class: "nav-menu-toggle",
                "aria-label": "Toggle menu",
                onclick: move |_| menu_open.toggle(),
                if menu_open() { "\u{00D7}" } else { "\u{2630}" }
            }
            ul { class: "nav-links",
                {buttons}
                li {
                    Link { class: "nav-link", to: Route::AllProjects {}, "All Projects" }
                }
            }
            ModeBadge {
                status: ModeState::from_enabled(hacker()),
                on_toggle: move |_| {
                    mode.toggle();
                },
            }
        }
    }
}
