//! Seams for the collaborators the page only talks to: toasts, sound
//! cues, the clipboard and file downloads.
//!
//! None of these may interrupt the action that triggered them. Audio and
//! clipboard failures are swallowed here; callers only learn whether a
//! copy succeeded so they can skip the confirmation.

use tracing::debug;

use crate::error::PortfolioResult;

/// Short sound effects used across the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Section navigation and opening a project
    PageFlip,
    /// Closing a project or going back
    PageBack,
    /// A detail page finished opening
    DetailOpen,
    /// Loading-screen ink splash
    InkSplash,
    /// Hero button hover
    Hover,
    /// Gallery next
    GalleryNext,
    /// Gallery previous
    GalleryPrev,
    /// Gallery indicator click
    GalleryJump,
    /// Filter menu open/close
    FilterMenu,
    /// Contact message sent
    MessageSent,
    /// Hacker mode toggled
    Magic,
}

impl Cue {
    /// Clip URL, which for some cues differs in hacker mode.
    pub fn clip(&self, hacker_mode: bool) -> &'static str {
        match (self, hacker_mode) {
            (Cue::PageFlip, false) => "https://www.soundjay.com/page-flip-sounds/page-flip-01a.mp3",
            (Cue::PageFlip, true) => "https://www.soundjay.com/technology/sounds/electronic-3.mp3",
            (Cue::PageBack, false) => "https://www.soundjay.com/page-flip-sounds/page-flip-02a.mp3",
            (Cue::PageBack, true) => "https://www.soundjay.com/technology/sounds/electronic-5.mp3",
            (Cue::DetailOpen, false) => "https://www.soundjay.com/page-flip-sounds/page-flip-03a.mp3",
            (Cue::DetailOpen, true) => "https://www.soundjay.com/technology/sounds/electronic-4.mp3",
            (Cue::InkSplash, _) => "https://www.soundjay.com/buttons/button-43.mp3",
            (Cue::Hover, _) => "https://www.soundjay.com/buttons/sounds/button-20.mp3",
            (Cue::GalleryNext, false) => "https://www.soundjay.com/buttons/sounds/button-09.mp3",
            (Cue::GalleryNext, true) => "https://www.soundjay.com/technology/sounds/electronic-1.mp3",
            (Cue::GalleryPrev, false) => "https://www.soundjay.com/buttons/sounds/button-10.mp3",
            (Cue::GalleryPrev, true) => "https://www.soundjay.com/technology/sounds/electronic-2.mp3",
            (Cue::GalleryJump, false) => "https://www.soundjay.com/buttons/sounds/button-11.mp3",
            (Cue::GalleryJump, true) => "https://www.soundjay.com/technology/sounds/electronic-1.mp3",
            (Cue::FilterMenu, false) => "https://www.soundjay.com/mechanical/sounds/page-flip-01a.mp3",
            (Cue::FilterMenu, true) => "https://www.soundjay.com/technology/sounds/electronic-2.mp3",
            (Cue::MessageSent, _) => "https://www.soundjay.com/buttons/button-09.mp3",
            (Cue::Magic, _) => "https://www.soundjay.com/nature/sounds/magical-effect-1.mp3",
        }
    }
}

/// Transient toast surface. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Sound cue player
pub trait AudioCue {
    fn play(&self, clip: &str) -> PortfolioResult<()>;
}

/// Clipboard writer
pub trait ClipboardWriter {
    fn copy(&self, text: &str) -> PortfolioResult<()>;
}

/// Save content to a user-visible file. Fire-and-forget.
pub trait FileDownload {
    fn download(&self, content: &str, filename: &str);
}

/// Play a cue, ignoring playback failures.
pub fn play_cue(player: &dyn AudioCue, cue: Cue, hacker_mode: bool) {
    if let Err(e) = player.play(cue.clip(hacker_mode)) {
        debug!(error = %e, ?cue, "Audio play failed");
    }
}

/// Copy text, reporting only whether a confirmation should be shown.
pub fn copy_to_clipboard(writer: &dyn ClipboardWriter, text: &str) -> bool {
    match writer.copy(text) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "Clipboard write failed");
            false
        }
    }
}
