//! Loading gate: the one-shot "THE LEGEND BEGINS..." screen.
//!
//! ```text
//!   tick (+1..=10)          progress == 100        settle delay
//! ┌─────────┐ ───────────► ┌──────────┐ ──────────► ┌───────┐
//! │ Loading │              │ Settling │             │ Ready │ (terminal)
//! └─────────┘              └──────────┘             └───────┘
//! ```
//!
//! The gate has no I/O and no failure path; only timing. The host drives it
//! with [`TICK_INTERVAL`] ticks and one [`SETTLE_DELAY`] wait.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

/// Interval between progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Delay between reaching 100% and opening the gate.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Smallest and largest per-tick increment.
pub const MIN_INCREMENT: u8 = 1;
pub const MAX_INCREMENT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Settling,
    Ready,
}

/// Simulated progress gate in front of the page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingGate {
    state: LoadingState,
    progress: u8,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// Progress percentage, 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Content may render only once the gate is ready.
    pub fn is_ready(&self) -> bool {
        self.state == LoadingState::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadingState::Loading
    }

    /// One timer tick with a random increment.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LoadingState {
        let increment = rng.random_range(MIN_INCREMENT..=MAX_INCREMENT);
        self.advance(increment)
    }

    /// Add `increment` (clamped to 1..=10) while loading.
    ///
    /// Progress stops at exactly 100 and the gate moves to `Settling`.
    /// Outside `Loading` this does nothing.
    pub fn advance(&mut self, increment: u8) -> LoadingState {
        if self.state != LoadingState::Loading {
            return self.state;
        }

        let increment = increment.clamp(MIN_INCREMENT, MAX_INCREMENT);
        self.progress = self.progress.saturating_add(increment).min(100);
        if self.progress == 100 {
            debug!("Loading complete, settling");
            self.state = LoadingState::Settling;
        }
        self.state
    }

    /// The settle delay elapsed. Only moves `Settling` to `Ready`.
    pub fn settle(&mut self) -> LoadingState {
        if self.state == LoadingState::Settling {
            debug!("Loading gate open");
            self.state = LoadingState::Ready;
        }
        self.state
    }

    /// Speech-bubble caption for the current progress.
    pub fn caption(&self) -> &'static str {
        match self.progress {
            0..=29 => "Preparing the ink...",
            30..=59 => "Drawing the panels...",
            60..=89 => "Adding the final touches...",
            _ => "Ready to explore the story!",
        }
    }

    /// An ink splash fires on exact quarter marks.
    pub fn ink_splash_due(&self) -> bool {
        self.progress > 0 && self.progress % 25 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reaches_exactly_100_then_ready() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut gate = LoadingGate::new();
        let mut ticks = 0;
        while gate.is_loading() {
            gate.tick(&mut rng);
            ticks += 1;
            assert!(ticks <= 100, "gate never finished");
        }
        assert_eq!(gate.progress(), 100);
        assert_eq!(gate.state(), LoadingState::Settling);
        assert_eq!(gate.settle(), LoadingState::Ready);
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut gate = LoadingGate::new();
        while gate.is_loading() {
            gate.advance(10);
        }
        gate.settle();
        assert_eq!(gate.advance(10), LoadingState::Ready);
        assert_eq!(gate.settle(), LoadingState::Ready);
        assert_eq!(gate.progress(), 100);
    }

    #[test]
    fn test_settle_before_complete_is_ignored() {
        let mut gate = LoadingGate::new();
        gate.advance(5);
        assert_eq!(gate.settle(), LoadingState::Loading);
    }

    #[test]
    fn test_increment_is_clamped() {
        let mut gate = LoadingGate::new();
        gate.advance(0);
        assert_eq!(gate.progress(), 1);
        gate.advance(200);
        assert_eq!(gate.progress(), 11);
    }

    #[test]
    fn test_progress_clamps_at_100() {
        let mut gate = LoadingGate::new();
        for _ in 0..9 {
            gate.advance(10);
        }
        gate.advance(7);
        assert_eq!(gate.progress(), 97);
        gate.advance(9);
        assert_eq!(gate.progress(), 100);
    }

    #[test]
    fn test_captions_and_splashes() {
        let mut gate = LoadingGate::new();
        assert_eq!(gate.caption(), "Preparing the ink...");
        assert!(!gate.ink_splash_due());
        gate.advance(10);
        gate.advance(10);
        gate.advance(5);
        assert!(gate.ink_splash_due());
        gate.advance(10);
        assert_eq!(gate.caption(), "Drawing the panels...");
        assert!(!gate.ink_splash_due());
    }
}
