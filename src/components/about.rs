//! Character select: portrait, power meter, style switcher and skills.

use dioxus::prelude::*;
use mangafolio_core::{CharacterStyle, Section};
use mangafolio_ui::{BubbleTail, ButtonVariant, MangaButton, ProgressBar, SpeechBubble};

use crate::context::use_hacker_mode;

#[component]
pub fn About(power_level: u8, power_up: bool, power_maxed: bool) -> Element {
    let hacker = use_hacker_mode();
    let mut style = use_signal(|| CharacterStyle::Developer);

    let enabled = hacker();
    let active = style();
    let portrait_class = if power_maxed { "portrait maxed" } else { "portrait" };

    rsx! {
        section { id: "{Section::About.element_id()}", class: "about",
            h2 { class: "manga-title", "CHARACTER SELECT" }

            div { class: "about-grid",
                div { class: "panel portrait-panel",
                    img { class: "{portrait_class}", src: "{active.image()}", alt: "{active.name()}" }
                    div { class: "portrait-overlay",
                        ProgressBar {
                            percent: power_level,
                            label: "POWER LEVEL".to_string(),
                            hacker_mode: enabled,
                        }
                    }
                    div { class: "style-switcher",
                        for candidate in CharacterStyle::ALL {
                            MangaButton {
                                key: "{candidate.name()}",
                                variant: if candidate == active { ButtonVariant::Action } else { ButtonVariant::Speech },
                                hacker_mode: enabled,
                                onclick: move |_| style.set(candidate),
                                "{candidate.button_label()}"
                            }
                        }
                    }
                }

                div { class: "about-text",
                    div { class: "panel",
                        h3 { class: "panel-title accent", "{active.name()}" }
                        p { class: "character-description", "{active.description()}" }
                        SpeechBubble { tail: BubbleTail::Right, hacker_mode: enabled,
                            "I transform ideas into digital experiences through clean code and creative design."
                        }
                    }
                    div { class: "panel",
                        h3 { class: "panel-title", "SKILLS" }
                        for skill in active.skills() {
                            ProgressBar {
                                key: "{skill.name}",
                                percent: skill.level,
                                label: skill.name.to_string(),
                                hacker_mode: enabled,
                            }
                        }
                    }
                }
            }

            div { class: if power_up { "sound-effect visible" } else { "sound-effect" }, "POWER UP!" }
        }
    }
}
