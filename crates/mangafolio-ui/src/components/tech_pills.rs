//! Technology Filter Pills
//!
//! Row of technology tags with a leading "All" pill. Selecting the active
//! pill again keeps it selected; "All" clears the filter.

use dioxus::prelude::*;

/// Label of the pill that clears the filter.
pub fn all_label(hacker_mode: bool) -> &'static str {
    mangafolio_core::resolve("All Projects", Some("ALL MISSIONS"), hacker_mode)
}

/// Properties for the TechPills component
#[derive(Clone, PartialEq, Props)]
pub struct TechPillsProps {
    /// Available technologies, already sorted
    pub technologies: Vec<String>,
    /// Active filter, `None` for all projects
    pub selected: Option<String>,
    /// Handler called with the new filter
    pub on_select: EventHandler<Option<String>>,
    #[props(default = false)]
    pub hacker_mode: bool,
}

/// Displays the filter row
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| None::<String>);
///
/// rsx! {
///     TechPills {
///         technologies: catalog.distinct_technologies(),
///         selected: filter(),
///         on_select: move |tech| filter.set(tech),
///     }
/// }
/// ```
#[component]
pub fn TechPills(props: TechPillsProps) -> Element {
    let selected = props.selected.clone();
    let on_select = props.on_select;
    let group_class = if props.hacker_mode { "tech-pills hacker" } else { "tech-pills" };

    rsx! {
        div {
            class: "{group_class}",
            role: "radiogroup",
            "aria-label": "Technology filter",
            TechPill {
                label: all_label(props.hacker_mode).to_string(),
                selected: selected.is_none(),
                on_click: move |_| on_select.call(None),
            }
            for tech in props.technologies.iter() {
                {
                    let tech_clone = tech.clone();
                    let is_selected = selected.as_deref() == Some(tech.as_str());
                    rsx! {
                        TechPill {
                            key: "{tech}",
                            label: tech.clone(),
                            selected: is_selected,
                            on_click: move |_| on_select.call(Some(tech_clone.clone())),
                        }
                    }
                }
            }
        }
    }
}

/// A single technology pill (also used as a read-only tag on cards)
#[derive(Clone, PartialEq, Props)]
pub struct TechPillProps {
    pub label: String,
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when clicked
    #[props(default)]
    pub on_click: Option<EventHandler<()>>,
}

#[component]
pub fn TechPill(props: TechPillProps) -> Element {
    let is_selected = props.selected;

    rsx! {
        button {
            class: if is_selected { "pill selected" } else { "pill" },
            role: "radio",
            "aria-checked": if is_selected { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.on_click {
                    handler.call(());
                }
            },
            "{props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_label_follows_mode() {
        assert_eq!(all_label(false), "All Projects");
        assert_eq!(all_label(true), "ALL MISSIONS");
    }
}
