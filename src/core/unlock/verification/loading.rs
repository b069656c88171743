//! Fake authentication progress bar
//!
//! Progress climbs by a random 1..=5 every 200..500 ms. After hitting 100 one
//! more tick, 500 ms later, completes the stage.

use super::Step;
use rand::Rng;
use std::time::Duration;

pub const STATUS_MESSAGES: [&str; 10] = [
    "Analyzing your cookie consumption habits...",
    "Determining if you're worthy of our memes...",
    "Recording your mouse movement dance style...",
    "Checking if you're actually a robot in disguise...",
    "Evaluating your ability to spot Rick Astley...",
    "Calculating potential productivity loss...",
    "Preparing to add your data to The Diddler\u{2122} collection...",
    "Loading developer jokes you'll pretend to understand...",
    "Finalizing authentication process...",
    "Preparing access to secret content...",
];

const SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingView {
    pub progress: u8,
    /// Current status line; `None` once the bar is full
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadingVerification {
    progress: u8,
    step: usize,
}

impl LoadingVerification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_full(&self) -> bool {
        self.progress >= 100
    }

    /// How long to wait before the next tick
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.is_full() {
            SETTLE_DELAY
        } else {
            Duration::from_millis(rng.gen_range(200..500))
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.is_full() {
            return Step::Passed;
        }

        self.progress = (self.progress + rng.gen_range(1..=5)).min(100);
        let step = usize::from(self.progress) * STATUS_MESSAGES.len() / 100;
        if step < STATUS_MESSAGES.len() {
            self.step = step;
        }
        Step::Recorded
    }

    pub fn view(&self) -> LoadingView {
        LoadingView {
            progress: self.progress,
            message: (!self.is_full()).then_some(STATUS_MESSAGES[self.step]),
        }
    }
}
