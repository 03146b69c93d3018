use dioxus::prelude::*;
use mangafolio_core::{Cue, HackerMode, LoadingGate, Notifier};
use mangafolio_ui::ToastStack;
use tokio::sync::broadcast::error::RecvError;

use crate::context::{load_catalog, open_preferences, Cues, HackerFlag, SessionGate, Toasts};
use crate::pages::{AllProjects, Index, ProjectDetails};
use crate::theme::{css_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Home page with the hero, character, projects and contact sections
/// - `/projects` - Full catalog with a technology filter
/// - `/project/:id` - Detail page; unknown ids redirect to `/projects`
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/projects")]
    AllProjects {},
    #[route("/project/:id")]
    ProjectDetails { id: String },
}

/// Root application component.
///
/// Provides global styles, shared state and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(load_catalog);
    let mode = use_context_provider(|| HackerMode::load(open_preferences()));

    let hacker = use_signal(|| mode.is_enabled());
    use_context_provider(|| HackerFlag(hacker));

    let gate = use_signal(LoadingGate::new);
    use_context_provider(|| SessionGate(gate));

    let toasts_list = use_signal(Vec::new);
    let next_toast_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts::new(toasts_list, next_toast_id));

    let cues = Cues::new(hacker);

    // Mirror mode changes into the UI, then acknowledge them
    use_future(move || {
        let mut hacker = hacker;
        let mut events = mode.subscribe();
        async move {
            loop {
                match events.recv().await {
                    Ok(change) => {
                        hacker.set(change.enabled);
                        toasts.notify(change.title(), change.body());
                        cues.play(Cue::Magic);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Mode events lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    let shell_class = if hacker() { "app hacker-mode" } else { "app" };
    let palette = use_hook(css_variables);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        div { class: "{shell_class}",
            Router::<Route> {}
            ToastStack {
                toasts: toasts.list().cloned(),
                on_dismiss: move |id| toasts.dismiss(id),
                hacker_mode: hacker(),
            }
        }
    }
}
