//! Speech Bubble Component
//!
//! Comic speech bubble used by the loading screen caption, section
//! headers and the hero greeting.

use dioxus::prelude::*;

/// Which side the bubble's tail points to
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BubbleTail {
    #[default]
    Left,
    Right,
    /// Jagged "shout" bubble without a tail
    Shout,
}

impl BubbleTail {
    pub fn class(&self) -> &'static str {
        match self {
            BubbleTail::Left => "bubble tail-left",
            BubbleTail::Right => "bubble tail-right",
            BubbleTail::Shout => "bubble shout",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SpeechBubbleProps {
    pub children: Element,
    #[props(default)]
    pub tail: BubbleTail,
    #[props(default = false)]
    pub hacker_mode: bool,
}

#[component]
pub fn SpeechBubble(props: SpeechBubbleProps) -> Element {
    let class = super::class_list(props.tail.class(), None, props.hacker_mode);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_classes() {
        assert_eq!(BubbleTail::default().class(), "bubble tail-left");
        assert_eq!(BubbleTail::Shout.class(), "bubble shout");
    }
}
