//! Secret input sequence detector.

use std::collections::VecDeque;

/// ↑ ↑ ↓ ↓ ← → ← → B A, as keyboard `key` names.
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding-window matcher over raw input tokens.
///
/// Keeps the last `target.len()` tokens; a match clears the window so the
/// tail of one entry can't start the next.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    target: Vec<String>,
    window: VecDeque<String>,
}

impl SequenceDetector {
    pub fn new<I, S>(target: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target: Vec<String> = target.into_iter().map(Into::into).collect();
        Self {
            window: VecDeque::with_capacity(target.len() + 1),
            target,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI_CODE)
    }

    /// Push one token. Returns `true` exactly when it completes the sequence.
    pub fn feed(&mut self, token: &str) -> bool {
        if self.target.is_empty() {
            return false;
        }

        self.window.push_back(token.to_string());
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }

        let matched = self.window.len() == self.target.len()
            && self.window.iter().zip(&self.target).all(|(a, b)| a == b);
        if matched {
            self.window.clear();
        }
        matched
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}
