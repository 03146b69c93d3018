//! Progress bars: the loading bar, the EXP bar and skill meters.

use dioxus::prelude::*;

/// Width style for a percentage, clamped to 0..=100.
pub fn width_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Fill percentage
    pub percent: u8,
    /// Text left of the bar, e.g. "EXP" or a skill name
    #[props(default)]
    pub label: Option<String>,
    /// Show the number right of the bar
    #[props(default = true)]
    pub show_value: bool,
    #[props(default = false)]
    pub hacker_mode: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent.min(100);
    let style = width_style(percent);
    let class = super::class_list("progress-bar", props.class.as_deref(), props.hacker_mode);

    rsx! {
        div {
            class: "{class}",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            if let Some(label) = &props.label {
                span { class: "progress-label", "{label}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{style}" }
            }
            if props.show_value {
                span { class: "progress-value", "{percent}%" }
            }
        }
    }
}
