//! Shared state and desktop peripherals for Mangafolio.
//!
//! The App component provides everything here via `use_context_provider`;
//! pages and components read it back through the `use_*` hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let hacker = use_hacker_mode();
//! let cues = use_cues();
//!
//! cues.play(Cue::PageFlip);
//! let title = record.title.resolve(hacker());
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use mangafolio_core::{
    play_cue, AudioCue, ClipboardWriter, Cue, FileDownload, HackerMode, LoadingGate,
    MemoryPreferences,
    Notifier, PortfolioError, PortfolioResult, PreferenceStore, ProjectCatalog, Storage,
};
use mangafolio_ui::{ToastMessage, TOAST_LIFETIME};
use rfd::FileDialog;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the preferences database, falling back to memory when it can't be
/// opened (e.g. another instance holds the lock).
pub fn open_preferences() -> Arc<dyn PreferenceStore> {
    let path = get_data_dir().join(crate::PREFERENCES_FILE);
    match Storage::new(&path) {
        Ok(storage) => {
            tracing::debug!(?path, "Opened preferences");
            Arc::new(storage)
        }
        Err(e) => {
            tracing::warn!(error = %e, ?path, "Preferences unavailable, hacker mode won't persist");
            Arc::new(MemoryPreferences::new())
        }
    }
}

/// Load the catalog from `--catalog`, or the built-in projects.
pub fn load_catalog() -> Arc<ProjectCatalog> {
    let Some(path) = crate::get_catalog_path() else {
        return Arc::new(ProjectCatalog::seeded());
    };
    match ProjectCatalog::from_path(&path) {
        Ok(catalog) => {
            tracing::info!(?path, count = catalog.len(), "Loaded project catalog");
            Arc::new(catalog)
        }
        Err(e) => {
            tracing::error!(error = %e, ?path, "Failed to load catalog, using built-in projects");
            Arc::new(ProjectCatalog::seeded())
        }
    }
}

/// Reactive mirror of the hacker-mode flag.
///
/// Updated by the App from [`HackerMode::subscribe`]; components read it to
/// re-render when the theme flips.
#[derive(Clone, Copy)]
pub struct HackerFlag(pub Signal<bool>);

/// The page loading gate, shared for the whole session.
///
/// Held by the App rather than the home page, so once it reaches
/// `Ready` returning to `/` never shows the loading screen again.
#[derive(Clone, Copy)]
pub struct SessionGate(pub Signal<LoadingGate>);

/// Toast queue shown by the App's `ToastStack`.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: Signal<Vec<ToastMessage>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new(list: Signal<Vec<ToastMessage>>, next_id: Signal<u64>) -> Self {
        Self { list, next_id }
    }

    pub fn list(&self) -> Signal<Vec<ToastMessage>> {
        self.list
    }

    pub fn dismiss(&self, id: u64) {
        let mut list = self.list;
        list.write().retain(|t| t.id != id);
    }
}

impl Notifier for Toasts {
    fn notify(&self, title: &str, body: &str) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut list = self.list;
        list.write().push(ToastMessage {
            id,
            title: title.to_string(),
            body: body.to_string(),
        });

        // Expiry outlives the component that raised the toast
        let toasts = *self;
        spawn_forever(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            toasts.dismiss(id);
        });
    }
}

/// Plays clips through the webview's `Audio` element.
pub struct WebviewAudio;

impl AudioCue for WebviewAudio {
    fn play(&self, clip: &str) -> PortfolioResult<()> {
        let clip = js_string(clip);
        // Autoplay rejections surface in the webview console only
        let _ = document::eval(&format!("new Audio({clip}).play().catch(() => {{}});"));
        Ok(())
    }
}

/// Quote a string for inclusion in a JS snippet.
fn js_string(value: &str) -> String {
    format!("{:?}", value)
}

/// System clipboard via arboard.
pub struct DesktopClipboard;

impl ClipboardWriter for DesktopClipboard {
    fn copy(&self, text: &str) -> PortfolioResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PortfolioError::Peripheral(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PortfolioError::Peripheral(e.to_string()))
    }
}

/// Save dialog via rfd, written from a blocking task.
pub struct DesktopDownload;

impl FileDownload for DesktopDownload {
    fn download(&self, content: &str, filename: &str) {
        let content = content.to_string();
        let filename = filename.to_string();

        spawn(async move {
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .set_title("Save Contact")
                    .set_file_name(&filename)
                    .save_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match tokio::fs::write(&path, content).await {
                    Ok(()) => tracing::info!(?path, "Saved download"),
                    Err(e) => tracing::warn!(error = %e, ?path, "Failed to save download"),
                },
                Ok(None) => tracing::debug!("Download cancelled"),
                Err(e) => tracing::warn!(error = %e, "Save dialog task failed"),
            }
        });
    }
}

/// Plays cues in the current mode.
#[derive(Clone, Copy)]
pub struct Cues {
    hacker: Signal<bool>,
}

impl Cues {
    pub fn new(hacker: Signal<bool>) -> Self {
        Self { hacker }
    }

    pub fn play(&self, cue: Cue) {
        play_cue(&WebviewAudio, cue, *self.hacker.peek());
    }
}

/// Hook to access the project catalog.
pub fn use_catalog() -> Arc<ProjectCatalog> {
    use_context::<Arc<ProjectCatalog>>()
}

/// Hook to access the hacker-mode handle (for toggling).
pub fn use_hacker_mode_handle() -> HackerMode {
    use_context::<HackerMode>()
}

/// Hook to read the hacker-mode flag reactively.
///
/// # Example
///
/// ```ignore
/// let hacker = use_hacker_mode();
/// rsx! { h1 { "{Label::HeroTitle.text(hacker())}" } }
/// ```
pub fn use_hacker_mode() -> Signal<bool> {
    use_context::<HackerFlag>().0
}

/// Hook to access the session's loading gate.
pub fn use_loading_gate() -> Signal<LoadingGate> {
    use_context::<SessionGate>().0
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Hook to play sound cues.
pub fn use_cues() -> Cues {
    Cues::new(use_hacker_mode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_is_quoted() {
        assert_eq!(js_string("a.mp3"), "\"a.mp3\"");
        assert_eq!(js_string("it's \"x\""), "\"it's \\\"x\\\"\"");
    }
}
