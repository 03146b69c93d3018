//! Button Components
//!
//! Panel-styled buttons:
//! - Panel: heavy ink border with an offset shadow
//! - Action: red fill, for the main call to action
//! - Speech: rounded, bubble-like, for secondary actions
//! - Ghost: borderless, for navigation links

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Heavy ink border, offset shadow, lifts on hover
    #[default]
    Panel,
    /// Filled accent button
    Action,
    /// Rounded speech-bubble button
    Speech,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Panel => "btn-panel",
            ButtonVariant::Action => "btn-action",
            ButtonVariant::Speech => "btn-speech",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extras, plus `hacker` when the mode is on.
pub fn class_list(base: &str, extra: Option<&str>, hacker_mode: bool) -> String {
    let mut class = base.to_string();
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if hacker_mode {
        class.push_str(" hacker");
    }
    class
}

/// Properties for the MangaButton component
#[derive(Clone, PartialEq, Props)]
pub struct MangaButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Hover handler, used for hover sound cues
    #[props(default)]
    pub onhover: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Switches to the terminal look
    #[props(default = false)]
    pub hacker_mode: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Panel-styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MangaButton {
///         variant: ButtonVariant::Action,
///         hacker_mode: mode(),
///         onclick: move |_| navigate(Section::Projects),
///         "View Adventures"
///     }
/// }
/// ```
#[component]
pub fn MangaButton(props: MangaButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref(), props.hacker_mode);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            onmouseenter: move |_| {
                if let Some(handler) = &props.onhover {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, gallery arrows, scroll to top)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref(), false);

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
