//! Home page projects section: the first few projects plus a quick-view
//! panel, with a link to the full catalog.

use dioxus::prelude::*;
use mangafolio_core::catalog::FEATURED_LIMIT;
use mangafolio_core::{Cue, ProjectRecord, Section};
use mangafolio_ui::{CloseButton, TechPill};

use super::ProjectCard;
use crate::app::Route;
use crate::context::{use_catalog, use_cues, use_hacker_mode};

#[component]
pub fn Showcase() -> Element {
    let catalog = use_catalog();
    let hacker = use_hacker_mode();
    let cues = use_cues();
    let mut selected = use_signal(|| None::<ProjectRecord>);

    let enabled = hacker();
    let featured = catalog.featured(FEATURED_LIMIT).to_vec();

    rsx! {
        section { id: "{Section::Projects.element_id()}", class: "showcase",
            h2 { class: "manga-title accent", "MY ADVENTURES" }

            div { class: "project-grid",
                for project in featured {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        hacker_mode: enabled,
                        on_quick_view: move |record| selected.set(Some(record)),
                    }
                }
            }

            div { class: "showcase-more",
                Link { class: "btn-panel", to: Route::AllProjects {}, "SEE ALL ADVENTURES" }
            }

            if let Some(project) = selected() {
                QuickView {
                    project,
                    hacker_mode: enabled,
                    on_close: move |_| {
                        cues.play(Cue::PageBack);
                        selected.set(None);
                    },
                }
            }
        }
    }
}

#[component]
fn QuickView(project: ProjectRecord, hacker_mode: bool, on_close: EventHandler<()>) -> Element {
    let title = project.title.resolve(hacker_mode).to_string();
    let details = project.details.resolve(hacker_mode).to_string();

    rsx! {
        div { class: "quick-view-backdrop",
            div { class: "panel quick-view",
                CloseButton { onclick: move |_| on_close.call(()) }
                img { class: "quick-view-cover", src: "{project.image}", alt: "{title}" }
                h3 { class: "panel-title", "{title}" }

                h4 { class: "quick-view-heading", "PROJECT DETAILS" }
                p { "{details}" }

                h4 { class: "quick-view-heading", "TECHNOLOGIES" }
                div { class: "project-tags",
                    for tech in project.technologies.iter() {
                        TechPill { key: "{tech}", label: tech.clone() }
                    }
                }

                div { class: "quick-view-links",
                    a { class: "btn-action", href: "{project.links.live}", target: "_blank", "Live Demo" }
                    a { class: "btn-panel", href: "{project.links.code}", target: "_blank", "View Code" }
                    Link {
                        class: "btn-ghost",
                        to: Route::ProjectDetails { id: project.id.to_string() },
                        "Full Story"
                    }
                }
            }
        }
    }
}
