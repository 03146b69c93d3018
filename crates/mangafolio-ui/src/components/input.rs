//! Input Field Components
//!
//! Text inputs and textareas for the contact form.
//! Features:
//! - Paper background with an ink border
//! - Accent outline on focus
//! - Green-on-black in hacker mode

use dioxus::prelude::*;

use super::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub hacker_mode: bool,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "contact-name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Your Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = class_list("input-field", None, props.hacker_mode);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub hacker_mode: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = class_list("input-field textarea", None, props.hacker_mode);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.id}",
                class: "{textarea_class}",
                rows: "{props.rows}",
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
