use dioxus::prelude::*;
use mangafolio_core::{Cue, ProjectRecord};
use mangafolio_ui::TechPill;

use crate::app::Route;
use crate::context::use_cues;

/// Card for one project, linking to its detail page.
///
/// When `on_quick_view` is set the card opens an inline preview instead.
#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    hacker_mode: bool,
    #[props(default)] on_quick_view: Option<EventHandler<ProjectRecord>>,
) -> Element {
    let cues = use_cues();
    let title = project.title.resolve(hacker_mode).to_string();
    let description = project.description.resolve(hacker_mode).to_string();
    let card_class = if hacker_mode { "panel project-card hacker" } else { "panel project-card" };

    let cover = rsx! {
        div { class: "project-cover",
            img { src: "{project.image}", alt: "{title}" }
            div { class: "project-cover-overlay",
                h3 { class: "panel-title", "{title}" }
            }
        }
    };

    let body = rsx! {
        p { class: "project-description", "{description}" }
        div { class: "project-tags",
            for tech in project.technologies.iter() {
                TechPill { key: "{tech}", label: tech.clone() }
            }
        }
    };

    match on_quick_view {
        Some(handler) => {
            let preview = project.clone();
            rsx! {
                div {
                    class: "{card_class}",
                    onclick: move |_| {
                        cues.play(Cue::PageFlip);
                        handler.call(preview.clone());
                    },
                    {cover}
                    {body}
                }
            }
        }
        None => rsx! {
            Link {
                class: "{card_class}",
                to: Route::ProjectDetails { id: project.id.to_string() },
                onclick: move |_| cues.play(Cue::PageFlip),
                {cover}
                {body}
            }
        },
    }
}
