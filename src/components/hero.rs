use dioxus::prelude::*;
use mangafolio_core::{Cue, Label, Section};
use mangafolio_ui::{BubbleTail, ButtonVariant, MangaButton, SpeechBubble};

use crate::context::{use_cues, use_hacker_mode};

/// Opening panel with the title, greeting and two calls to action.
#[component]
pub fn Hero(on_navigate: EventHandler<Section>) -> Element {
    let hacker = use_hacker_mode();
    let cues = use_cues();
    let mut sound_effect = use_signal(|| false);

    // "WHOOSH!" flashes for 700 ms on hover
    let mut whoosh = move || {
        cues.play(Cue::Hover);
        sound_effect.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(700)).await;
            sound_effect.set(false);
        });
    };

    let enabled = hacker();

    rsx! {
        section { id: "{Section::Home.element_id()}", class: "hero",
            div { class: "speed-lines" }
            div { class: "panel hero-panel",
                h1 {
                    class: "manga-title",
                    onmouseenter: move |_| whoosh(),
                    "{Label::HeroTitle.text(enabled)}"
                }
                SpeechBubble { tail: BubbleTail::Left, hacker_mode: enabled,
                    p { class: "hero-greeting", "{Label::HeroGreeting.text(enabled)}" }
                }
                div { class: "hero-actions",
                    MangaButton {
                        variant: ButtonVariant::Action,
                        hacker_mode: enabled,
                        onclick: move |_| on_navigate.call(Section::About),
                        onhover: move |_| whoosh(),
                        "{Label::MeetTheHero.text(enabled)}"
                    }
                    MangaButton {
                        variant: ButtonVariant::Panel,
                        hacker_mode: enabled,
                        onclick: move |_| on_navigate.call(Section::Projects),
                        "{Label::ViewAdventures.text(enabled)}"
                    }
                }
            }
            div { class: if sound_effect() { "sound-effect visible" } else { "sound-effect" },
                if enabled { "SYSTEM ONLINE!" } else { "WHOOSH!" }
            }
        }
    }
}
