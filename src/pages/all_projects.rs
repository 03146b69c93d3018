//! Full project catalog with a technology filter.
//!
//! The filter is page-local and resets when the page is left.

use dioxus::prelude::*;
use mangafolio_core::content::{empty_filter_message, filter_toast};
use mangafolio_core::{Cue, Label, Notifier};
use mangafolio_ui::{ButtonVariant, MangaButton, TechPills};

use crate::app::Route;
use crate::components::ProjectCard;
use crate::context::{use_catalog, use_cues, use_hacker_mode, use_toasts};

#[component]
pub fn AllProjects() -> Element {
    let catalog = use_catalog();
    let hacker = use_hacker_mode();
    let cues = use_cues();
    let toasts = use_toasts();
    let mut filter = use_signal(|| None::<String>);
    let mut menu_open = use_signal(|| false);

    let technologies = use_hook(|| catalog.distinct_technologies());

    let toggle_menu = move |_: ()| {
        menu_open.toggle();
        cues.play(Cue::FilterMenu);
    };

    let mut apply_filter = move |tech: Option<String>| {
        let (title, body) = filter_toast(tech.as_deref(), *hacker.peek());
        tracing::debug!(filter = ?tech, "Filter changed");
        filter.set(tech);
        menu_open.set(false);
        toasts.notify(&title, &body);
    };

    let enabled = hacker();
    let active = filter();
    let visible: Vec<_> = catalog
        .filter_by_technology(active.as_deref())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        main { class: "all-projects",
            header { class: "page-header",
                Link { class: "btn-ghost back-link", to: Route::Index {},
                    "\u{2190} {Label::BackToHome.text(enabled)}"
                }
                h1 { class: "manga-title", "{Label::AllProjectsTitle.text(enabled)}" }
                MangaButton {
                    variant: ButtonVariant::Speech,
                    hacker_mode: enabled,
                    onclick: toggle_menu,
                    "{Label::FilterProjects.text(enabled)}"
                }
            }

            if menu_open() {
                div { class: "panel filter-menu",
                    h3 { class: "panel-title", "{Label::FilterByTechnology.text(enabled)}" }
                    TechPills {
                        technologies: technologies.clone(),
                        selected: active.clone(),
                        on_select: apply_filter,
                        hacker_mode: enabled,
                    }
                }
            }

            if let Some(tech) = active.as_deref() {
                div { class: "active-filter",
                    span { "{tech}" }
                    button { class: "pill-clear", onclick: move |_| apply_filter(None), "\u{00D7}" }
                }
            }

            if visible.is_empty() {
                div { class: "panel empty-state",
                    h2 { "{Label::NoProjectsFound.text(enabled)}" }
                    p { "{empty_filter_message(active.as_deref().unwrap_or_default(), enabled)}" }
                    MangaButton {
                        variant: ButtonVariant::Action,
                        hacker_mode: enabled,
                        onclick: move |_| apply_filter(None),
                        "{Label::ShowAllProjects.text(enabled)}"
                    }
                }
            } else {
                div { class: "project-grid",
                    for project in visible {
                        ProjectCard { key: "{project.id}", project: project.clone(), hacker_mode: enabled }
                    }
                }
            }
        }
    }
}
