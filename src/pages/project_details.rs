//! Project detail page.
//!
//! The `:id` segment is validated against the catalog first; anything that
//! doesn't name a record redirects to `/projects` without rendering.

use dioxus::prelude::*;
use mangafolio_core::{
    resolve_project_route, Cue, GalleryCursor, Label, Neighbor, ProjectId, ProjectRoute,
    DETAIL_LOAD_DELAY,
};
use mangafolio_ui::TechPill;

use crate::app::Route;
use crate::components::GalleryViewer;
use crate::context::{use_catalog, use_cues, use_hacker_mode};

/// Detail page for `/project/:id`.
#[component]
pub fn ProjectDetails(id: String) -> Element {
    let catalog = use_catalog();

    match resolve_project_route(&id, &catalog) {
        ProjectRoute::Show(project_id) => rsx! {
            ProjectView { project_id }
        },
        ProjectRoute::RedirectToCatalog => rsx! {
            RedirectToCatalog {}
        },
    }
}

#[component]
fn RedirectToCatalog() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::AllProjects {});
    });

    rsx! {}
}

#[component]
fn ProjectView(project_id: ProjectId) -> Element {
    let catalog = use_catalog();
    let hacker = use_hacker_mode();
    let cues = use_cues();

    // Cursor tagged with the project it belongs to
    let mut gallery = use_signal(|| (project_id, GalleryCursor::default()));
    let mut loading = use_signal(|| true);
    let mut load_task = use_signal(|| None::<Task>);

    let lookup = catalog.clone();
    use_effect(use_reactive((&project_id,), move |(project_id,)| {
        let len = lookup.get_by_id(project_id).map_or(0, |r| r.gallery.len());
        gallery.set((project_id, GalleryCursor::new(len)));
        loading.set(true);
        tracing::debug!(%project_id, "Opening project");

        let previous = load_task.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(DETAIL_LOAD_DELAY).await;
            loading.set(false);
            cues.play(Cue::DetailOpen);
        });
        load_task.set(Some(task));
        let _ = document::eval("window.scrollTo(0, 0);");
    }));

    let Some(project) = catalog.get_by_id(project_id).cloned() else {
        return rsx! {
            RedirectToCatalog {}
        };
    };

    let enabled = hacker();

    if loading() {
        return rsx! {
            main { class: "project-loading",
                h2 { class: "manga-title", "{Label::LoadingProject.text(enabled)}" }
                div { class: "loading-dots",
                    span {}
                    span {}
                    span {}
                }
            }
        };
    }

    // Until the effect catches up, a cursor for another project reads as fresh
    let (cursor_owner, stored) = gallery();
    let cursor = if cursor_owner == project_id {
        stored
    } else {
        GalleryCursor::new(project.gallery.len())
    };

    let neighbors = catalog.neighbors(project_id, enabled);
    let title = project.title.resolve(enabled).to_string();

    rsx! {
        main { class: "project-details",
            Link {
                class: "btn-ghost back-link",
                to: Route::AllProjects {},
                onclick: move |_| cues.play(Cue::PageBack),
                "\u{2190} {Label::BackToProjects.text(enabled)}"
            }

            header { class: "panel project-hero",
                img { class: "project-hero-image", src: "{project.image}", alt: "{title}" }
                h1 { class: "manga-title", "{title}" }
                p { class: "project-description", "{project.description.resolve(enabled)}" }
                div { class: "project-tags",
                    for tech in project.technologies.iter() {
                        TechPill { key: "{tech}", label: tech.clone() }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "{Label::ProjectOverview.text(enabled)}" }
                p { "{project.details.resolve(enabled)}" }
            }

            section { class: "panel",
                h2 { class: "panel-title", "{Label::ProjectGallery.text(enabled)}" }
                GalleryViewer {
                    images: project.gallery.clone(),
                    cursor,
                    hacker_mode: enabled,
                    on_move: move |next| gallery.set((project_id, next)),
                }
            }

            div { class: "project-story",
                section { class: "panel",
                    h2 { class: "panel-title", "{Label::Challenges.text(enabled)}" }
                    p { "{project.challenges.resolve(enabled)}" }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "{Label::Solutions.text(enabled)}" }
                    p { "{project.solutions.resolve(enabled)}" }
                }
            }

            div { class: "project-links",
                a { class: "btn-action", href: "{project.links.live}", target: "_blank",
                    "{Label::LiveDemo.text(enabled)}"
                }
                a { class: "btn-panel", href: "{project.links.code}", target: "_blank",
                    "{Label::ViewCode.text(enabled)}"
                }
            }

            nav { class: "project-neighbors",
                if let Some(previous) = neighbors.previous {
                    NeighborLink { neighbor: previous, label: Label::PreviousProject.text(enabled) }
                }
                if let Some(next) = neighbors.next {
                    NeighborLink { neighbor: next, label: Label::NextProject.text(enabled) }
                }
            }
        }
    }
}

#[component]
fn NeighborLink(neighbor: Neighbor, label: &'static str) -> Element {
    let cues = use_cues();

    rsx! {
        Link {
            class: "panel neighbor-link",
            to: Route::ProjectDetails { id: neighbor.id.to_string() },
            onclick: move |_| cues.play(Cue::PageFlip),
            span { class: "neighbor-label", "{label}" }
            span { class: "neighbor-title", "{neighbor.title}" }
        }
    }
}
