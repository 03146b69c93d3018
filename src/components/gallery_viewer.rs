//! Image carousel for the project detail page.

use dioxus::prelude::*;
use mangafolio_core::content::empty_gallery_message;
use mangafolio_core::{Cue, GalleryCursor};
use mangafolio_ui::IconButton;

use crate::context::use_cues;

/// Gallery with previous/next arrows and indicator dots.
///
/// The cursor is owned by the page so it can be reset when the project
/// changes; this component only moves it.
#[component]
pub fn GalleryViewer(
    images: Vec<String>,
    cursor: GalleryCursor,
    hacker_mode: bool,
    on_move: EventHandler<GalleryCursor>,
) -> Element {
    let cues = use_cues();

    let Some(current) = cursor.current(&images).map(str::to_string) else {
        return rsx! {
            div { class: "gallery empty",
                p { "{empty_gallery_message(hacker_mode)}" }
            }
        };
    };

    let caption = cursor.label(hacker_mode).unwrap_or_default();

    let step = move |cue: Cue, apply: fn(&mut GalleryCursor)| {
        let mut next = cursor;
        apply(&mut next);
        cues.play(cue);
        on_move.call(next);
    };

    rsx! {
        div { class: if hacker_mode { "gallery hacker" } else { "gallery" },
            div { class: "gallery-frame",
                img { src: "{current}", alt: "{caption}" }
                if cursor.can_navigate() {
                    IconButton {
                        class: "gallery-prev".to_string(),
                        aria_label: "Previous image".to_string(),
                        onclick: move |_| step(Cue::GalleryPrev, GalleryCursor::prev),
                        "\u{2039}"
                    }
                    IconButton {
                        class: "gallery-next".to_string(),
                        aria_label: "Next image".to_string(),
                        onclick: move |_| step(Cue::GalleryNext, GalleryCursor::next),
                        "\u{203A}"
                    }
                }
            }
            if cursor.can_navigate() {
                div { class: "gallery-dots",
                    for i in 0..cursor.len() {
                        button {
                            key: "{i}",
                            class: if i == cursor.index() { "gallery-dot active" } else { "gallery-dot" },
                            "aria-label": "Show image {i + 1}",
                            onclick: move |_| {
                                let mut next = cursor;
                                if next.jump_to(i) {
                                    cues.play(Cue::GalleryJump);
                                    on_move.call(next);
                                }
                            },
                        }
                    }
                }
            }
            p { class: "gallery-caption", "{caption}" }
        }
    }
}
