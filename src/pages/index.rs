//! Home page: loading screen, then the four sections.
//!
//! Scroll position and key presses come from small webview listeners that
//! stream samples back over `eval`. They feed the navigation controller
//! (current section, secret code) and the cosmetic meters.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Datelike;
use dioxus::prelude::*;
use mangafolio_core::{
    experience_points, show_scroll_to_top, Cue, Label, NavigationController, PowerMeter, Section,
};
use mangafolio_ui::{IconButton, ProgressBar};
use serde::Deserialize;

use crate::components::{About, ContactSection, Hero, LoadingScreen, NavBar, Showcase};
use crate::context::{use_cues, use_hacker_mode, use_hacker_mode_handle, use_loading_gate};

/// How long the "POWER UP!" effect stays on screen
const POWER_UP_FLASH: Duration = Duration::from_secs(1);

/// Streams one sample per scroll/resize event.
///
/// Listeners hang off `window.__mfScroll`; a new run or [`DETACH_LISTENERS`]
/// aborts the previous set.
const SCROLL_LISTENER: &str = r#"
window.__mfScroll?.abort();
const ctl = new AbortController();
window.__mfScroll = ctl;
const send = () => {
  const offsets = {};
  for (const id of ["home", "about", "projects", "contact"]) {
    const el = document.getElementById(id + "-section");
    if (el) offsets[id] = el.offsetTop;
  }
  const about = document.getElementById("about-section");
  dioxus.send({
    scroll_y: window.scrollY,
    max_scroll: document.documentElement.scrollHeight - window.innerHeight,
    viewport_height: window.innerHeight,
    offsets,
    about_top: about ? about.getBoundingClientRect().top : null,
  });
};
window.addEventListener("scroll", send, { passive: true, signal: ctl.signal });
window.addEventListener("resize", send, { signal: ctl.signal });
send();
"#;

/// Streams `KeyboardEvent.key` for every key press.
const KEY_LISTENER: &str = r#"
window.__mfKeys?.abort();
const ctl = new AbortController();
window.__mfKeys = ctl;
document.addEventListener("keydown", (e) => dioxus.send(e.key), { signal: ctl.signal });
"#;

/// Removes both listener sets when the home sections unmount.
const DETACH_LISTENERS: &str = r#"
window.__mfScroll?.abort();
window.__mfKeys?.abort();
"#;

#[derive(Debug, Clone, Deserialize)]
struct ScrollSample {
    scroll_y: f64,
    max_scroll: f64,
    viewport_height: f64,
    #[serde(default)]
    offsets: HashMap<String, f64>,
    about_top: Option<f64>,
}

impl ScrollSample {
    fn section_offsets(&self) -> Vec<(Section, f64)> {
        self.offsets
            .iter()
            .filter_map(|(id, top)| Section::from_id(id).map(|s| (s, *top)))
            .collect()
    }
}

/// Home page component.
///
/// The loading gate lives in app context, so it only runs once per session.
#[component]
pub fn Index() -> Element {
    let gate = use_loading_gate();
    let ready = gate.read().is_ready();

    rsx! {
        if ready {
            HomeSections {}
        } else {
            LoadingScreen {}
        }
    }
}

#[component]
fn HomeSections() -> Element {
    let mode = use_hacker_mode_handle();
    let hacker = use_hacker_mode();
    let cues = use_cues();

    let mut nav = use_signal(|| NavigationController::new(mode));
    let mut exp = use_signal(|| 0u8);
    let mut show_top = use_signal(|| false);
    let mut power = use_signal(PowerMeter::new);
    let mut power_up = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        loop {
            let sample = match listener.recv::<ScrollSample>().await {
                Ok(sample) => sample,
                Err(e) => {
                    tracing::debug!(error = ?e, "Scroll listener closed");
                    break;
                }
            };

            {
                let mut nav = nav.write();
                nav.tracker_mut().set_offsets(&sample.section_offsets());
                nav.on_scroll(sample.scroll_y);
            }

            exp.set(experience_points(sample.scroll_y, sample.max_scroll));
            show_top.set(show_scroll_to_top(sample.scroll_y, sample.viewport_height));

            if let Some(top) = sample.about_top {
                if power.write().update(top, sample.viewport_height) {
                    power_up.set(true);
                    spawn(async move {
                        tokio::time::sleep(POWER_UP_FLASH).await;
                        power_up.set(false);
                    });
                }
            }
        }
    });

    use_future(move || async move {
        let mut listener = document::eval(KEY_LISTENER);
        while let Ok(key) = listener.recv::<String>().await {
            // The toggle is acknowledged by the App's mode subscription
            nav.write().on_key(&key);
        }
    });

    use_drop(|| {
        let _ = document::eval(DETACH_LISTENERS);
    });

    let navigate = move |section: Section| {
        let command = nav.read().request_navigate(section);
        cues.play(Cue::PageFlip);
        let _ = document::eval(&format!(
            "window.scrollTo({{ top: {}, behavior: 'smooth' }});",
            command.top
        ));
    };

    let enabled = hacker();
    let nav_items = nav.read().nav_items();
    let meter = power();
    let year = chrono::Local::now().year();

    rsx! {
        div { class: "home",
            NavBar { items: nav_items, on_navigate: navigate }
            div { class: "exp-bar",
                ProgressBar { percent: exp(), label: "EXP".to_string(), hacker_mode: enabled }
            }

            Hero { on_navigate: navigate }
            About {
                power_level: meter.level(),
                power_up: power_up(),
                power_maxed: meter.is_maxed(),
            }
            Showcase {}
            ContactSection {}

            footer { class: "site-footer",
                p { "\u{00A9} {year} {Label::FooterBrand.text(enabled)}" }
                p { class: "footer-hint",
                    if enabled { "SECRET CODE ACCEPTED" } else { "Psst... try the secret code" }
                }
            }

            if show_top() {
                IconButton {
                    class: "scroll-top".to_string(),
                    aria_label: "Back to top".to_string(),
                    onclick: move |_| navigate(Section::Home),
                    "\u{2191}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_replace_and_detach_previous_sets() {
        for (script, handle) in [(SCROLL_LISTENER, "__mfScroll"), (KEY_LISTENER, "__mfKeys")] {
            assert!(script.contains(&format!("window.{handle}?.abort();")));
            assert!(script.contains(&format!("window.{handle} = ctl;")));
            assert!(DETACH_LISTENERS.contains(&format!("window.{handle}?.abort();")));
        }
        assert_eq!(SCROLL_LISTENER.matches("signal: ctl.signal").count(), 2);
        assert_eq!(KEY_LISTENER.matches("signal: ctl.signal").count(), 1);
    }
}
