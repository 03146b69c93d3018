//! Hacker mode: the one piece of state shared across every view.
//!
//! ```text
//! ┌──────────────┐  toggle()/set()  ┌──────────────────┐
//! │ secret code  │ ───────────────► │    HackerMode    │──► PreferenceStore
//! │ toggle button│                  │  (Arc, cloneable)│      ("hackerMode")
//! └──────────────┘                  └────────┬─────────┘
//!                                            │ ModeChanged (broadcast)
//!                                            ▼
//!                                   views, toast, audio cue
//! ```
//!
//! The new value is written to the store before subscribers hear about it,
//! so a reload straight after a toggle never shows the stale theme.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::storage::PreferenceStore;

/// Preference key holding `"true"` / `"false"`.
pub const HACKER_MODE_KEY: &str = "hackerMode";

/// Capacity of the mode-change broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Emitted once per change of the flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChanged {
    /// Value after the change
    pub enabled: bool,
}

impl ModeChanged {
    /// Toast title acknowledging the change.
    pub fn title(&self) -> &'static str {
        if self.enabled {
            "Hacker Mode Activated!"
        } else {
            "Hacker Mode Deactivated"
        }
    }

    /// Toast body acknowledging the change.
    pub fn body(&self) -> &'static str {
        if self.enabled {
            "You've unlocked the secret cyber-manga dimension!"
        } else {
            "Returning to normal manga mode"
        }
    }
}

struct Inner {
    enabled: RwLock<bool>,
    store: Arc<dyn PreferenceStore>,
    events: broadcast::Sender<ModeChanged>,
}

/// Process-wide hacker-mode flag with persistence and change notification.
///
/// Cloning shares the same flag.
#[derive(Clone)]
pub struct HackerMode {
    inner: Arc<Inner>,
}

impl HackerMode {
    /// Read the persisted flag.
    ///
    /// Anything other than the exact string `"true"` (missing key, garbage,
    /// a failing store) loads as `false`.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let enabled = match store.get(HACKER_MODE_KEY) {
            Ok(Some(value)) => parse_flag(&value),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read hacker mode preference, using default");
                false
            }
        };
        debug!(enabled, "Loaded hacker mode");

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                enabled: RwLock::new(enabled),
                store,
                events,
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self.inner.enabled.read()
    }

    /// Flip the flag, persist it, then notify. Returns the new value.
    pub fn toggle(&self) -> bool {
        let enabled = {
            let mut guard = self.inner.enabled.write();
            *guard = !*guard;
            *guard
        };
        self.persist(enabled);
        self.notify(enabled);
        enabled
    }

    /// Set the flag explicitly. Persists every time, notifies on change only.
    pub fn set(&self, enabled: bool) {
        let changed = {
            let mut guard = self.inner.enabled.write();
            let changed = *guard != enabled;
            *guard = enabled;
            changed
        };
        self.persist(enabled);
        if changed {
            self.notify(enabled);
        }
    }

    /// Receive a [`ModeChanged`] for every subsequent change.
    pub fn subscribe(&self) -> broadcast::Receiver<ModeChanged> {
        self.inner.events.subscribe()
    }

    fn persist(&self, enabled: bool) {
        if let Err(e) = self
            .inner
            .store
            .set(HACKER_MODE_KEY, if enabled { "true" } else { "false" })
        {
            warn!(error = %e, enabled, "Failed to persist hacker mode");
        }
    }

    fn notify(&self, enabled: bool) {
        info!(enabled, "Hacker mode changed");
        // No subscribers is fine
        let _ = self.inner.events.send(ModeChanged { enabled });
    }
}

impl std::fmt::Debug for HackerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HackerMode")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl PartialEq for HackerMode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn parse_flag(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use crate::storage::MemoryPreferences;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PortfolioError> {
            Err(PortfolioError::Serialization("corrupt".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PortfolioError> {
            Err(PortfolioError::Serialization("read-only".into()))
        }
    }

    #[test]
    fn test_load_defaults() {
        assert!(!HackerMode::load(Arc::new(MemoryPreferences::new())).is_enabled());
        assert!(!HackerMode::load(Arc::new(MemoryPreferences::with(HACKER_MODE_KEY, "yes"))).is_enabled());
        assert!(!HackerMode::load(Arc::new(FailingStore)).is_enabled());
        assert!(HackerMode::load(Arc::new(MemoryPreferences::with(HACKER_MODE_KEY, "true"))).is_enabled());
    }

    #[test]
    fn test_toggle_twice_persists_original() {
        let store = Arc::new(MemoryPreferences::new());
        let mode = HackerMode::load(store.clone());

        assert!(mode.toggle());
        assert_eq!(store.get(HACKER_MODE_KEY).unwrap().as_deref(), Some("true"));

        assert!(!mode.toggle());
        assert_eq!(store.get(HACKER_MODE_KEY).unwrap().as_deref(), Some("false"));
        assert!(!mode.is_enabled());
    }

    #[test]
    fn test_toggle_survives_failing_store() {
        let mode = HackerMode::load(Arc::new(FailingStore));
        assert!(mode.toggle());
        assert!(mode.is_enabled());
    }

    #[test]
    fn test_subscribers_hear_each_change_once() {
        let mode = HackerMode::load(Arc::new(MemoryPreferences::new()));
        let mut rx = mode.subscribe();

        mode.toggle();
        mode.set(true); // unchanged, no event
        mode.set(false);

        assert_eq!(rx.try_recv().unwrap(), ModeChanged { enabled: true });
        assert_eq!(rx.try_recv().unwrap(), ModeChanged { enabled: false });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let mode = HackerMode::load(Arc::new(MemoryPreferences::new()));
        let other = mode.clone();
        mode.toggle();
        assert!(other.is_enabled());
        assert_eq!(mode, other);
    }

    #[test]
    fn test_value_persisted_before_notification() {
        let store = Arc::new(MemoryPreferences::new());
        let mode = HackerMode::load(store.clone());
        let mut rx = mode.subscribe();
        mode.set(true);
        let event = rx.try_recv().unwrap();
        assert!(event.enabled);
        assert_eq!(store.get(HACKER_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(event.title(), "Hacker Mode Activated!");
    }
}
