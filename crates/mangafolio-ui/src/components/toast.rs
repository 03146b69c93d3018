//! Toast Component
//!
//! Transient notification in the corner of the window. The host owns the
//! list and removes entries after [`TOAST_LIFETIME`].

use std::time::Duration;

use dioxus::prelude::*;

use super::{class_list, CloseButton};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// One queued notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    /// Monotonic id, used as the render key and for removal
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastMessage>,
    /// Called with a toast id when its close button is clicked
    pub on_dismiss: EventHandler<u64>,
    #[props(default = false)]
    pub hacker_mode: bool,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    let on_dismiss = props.on_dismiss;
    let class = class_list("toast-stack", None, props.hacker_mode);

    rsx! {
        div { class: "{class}", role: "status", "aria-live": "polite",
            for toast in props.toasts.iter() {
                {
                    let id = toast.id;
                    rsx! {
                        div { key: "{id}", class: "toast",
                            div { class: "toast-text",
                                strong { class: "toast-title", "{toast.title}" }
                                p { class: "toast-body", "{toast.body}" }
                            }
                            CloseButton {
                                onclick: move |_| {
                                    tracing::debug!(id, "Toast dismissed");
                                    on_dismiss.call(id);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
