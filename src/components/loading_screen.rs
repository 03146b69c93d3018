//! Loading screen in front of the home page.
//!
//! Drives the session's [`LoadingGate`](mangafolio_core::LoadingGate) on a
//! 300 ms tick. Once progress hits 100 it waits out the settle delay and
//! settles the gate, which lets the home page render. The tasks are owned
//! by this component, so navigating away pauses the gate where it is.

use dioxus::prelude::*;
use mangafolio_core::{Cue, LoadingState, SETTLE_DELAY, TICK_INTERVAL};
use mangafolio_ui::{BubbleTail, ProgressBar, SpeechBubble};

use crate::context::{use_cues, use_loading_gate};

#[component]
pub fn LoadingScreen() -> Element {
    let mut gate = use_loading_gate();
    let mut splash = use_signal(|| 0u32);
    let cues = use_cues();

    use_future(move || async move {
        while gate.peek().is_loading() {
            tokio::time::sleep(TICK_INTERVAL).await;
            gate.write().tick(&mut rand::rng());

            if gate.peek().ink_splash_due() {
                let count = *splash.peek();
                splash.set(count + 1);
                cues.play(Cue::InkSplash);
            }
        }

        tokio::time::sleep(SETTLE_DELAY).await;
        if gate.write().settle() == LoadingState::Ready {
            tracing::debug!("Loading screen done");
        }
    });

    let gate = gate.read();
    let splash_count = splash();

    rsx! {
        div { class: "loading-screen",
            // Alternating classes restart the animation on every splash
            if splash_count > 0 {
                div { class: "ink-splash splash-{splash_count % 2}" }
            }

            h1 { class: "manga-title accent", "THE LEGEND BEGINS..." }

            div { class: "loading-progress",
                ProgressBar { percent: gate.progress(), show_value: false }
                div { class: "loading-scale",
                    span { "0%" }
                    span { "100%" }
                }
            }

            SpeechBubble { tail: BubbleTail::Left,
                p { class: "loading-caption", "{gate.caption()}" }
            }

            p { class: "loading-hint", "Click anywhere to discover hidden elements!" }
        }
    }
}
