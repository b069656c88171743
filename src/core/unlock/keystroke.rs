//! Secret keystroke sequence detection

use std::collections::VecDeque;

/// The GTA San Andreas "HESOYAM" cheat, typed in lowercase
pub const SECRET_SEQUENCE: [&str; 7] = ["h", "e", "s", "o", "y", "a", "m"];

/// Hint shown on the locked tile
pub const LOCKED_HINT: &str =
    "Hint: The cheat to increase ones health and money in GTA San Andreas.";

/// Sliding buffer over the most recent keystrokes
///
/// No feedback is given for partial or wrong input; the buffer only reports a
/// match once its last `N` keys equal the target exactly.
#[derive(Debug, Clone)]
pub struct KeySequenceDetector {
    target: &'static [&'static str],
    recent: VecDeque<String>,
}

impl Default for KeySequenceDetector {
    fn default() -> Self {
        Self::new(&SECRET_SEQUENCE)
    }
}

impl KeySequenceDetector {
    pub fn new(target: &'static [&'static str]) -> Self {
        Self {
            target,
            recent: VecDeque::with_capacity(target.len()),
        }
    }

    /// Record a key and report whether the target sequence is now complete
    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == self.target.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key.to_string());

        self.recent.len() == self.target.len()
            && self.recent.iter().zip(self.target).all(|(typed, want)| typed == want)
    }

    /// Keys currently held, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
