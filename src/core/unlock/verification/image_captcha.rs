//! Tech-stack image grid CAPTCHA
//!
//! Two rounds on the same ten-icon grid: first the PERN icons, then LAMP.

use super::Step;
use std::collections::BTreeSet;

pub const ICONS: [&str; 10] = [
    "MongoDB",
    "Laravel",
    "PostgreSQL",
    "Angular",
    "Express",
    "MySQL",
    "React",
    "Node.js",
    "PHP",
    "Docker",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackRound {
    Pern,
    Lamp,
}

impl StackRound {
    pub fn name(self) -> &'static str {
        match self {
            StackRound::Pern => "PERN",
            StackRound::Lamp => "LAMP",
        }
    }

    /// Grid positions that make up the round's answer
    pub fn answer(self) -> &'static [usize] {
        match self {
            StackRound::Pern => &[2, 4, 6, 7],
            StackRound::Lamp => &[1, 3, 5, 8],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageCaptcha {
    round: StackRound,
    selected: BTreeSet<usize>,
    error: bool,
}

impl Default for ImageCaptcha {
    fn default() -> Self {
        Self {
            round: StackRound::Pern,
            selected: BTreeSet::new(),
            error: false,
        }
    }
}

impl ImageCaptcha {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round(&self) -> StackRound {
        self.round
    }

    pub fn prompt(&self) -> String {
        format!(
            "Select all squares with {} stack technologies",
            self.round.name()
        )
    }

    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error
            .then(|| format!("Incorrect {} stack selection. Try again.", self.round.name()))
    }

    /// Select or deselect a cell; `None` if `index` is off the grid
    pub fn toggle(&mut self, index: usize) -> Option<Step> {
        if index >= ICONS.len() {
            return None;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.error = false;
        Some(Step::Recorded)
    }

    pub fn submit(&mut self) -> Step {
        let correct = self.selected.len() == self.round.answer().len()
            && self.round.answer().iter().all(|cell| self.selected.contains(cell));
        self.selected.clear();

        if !correct {
            self.error = true;
            return Step::Incorrect {
                message: self.error_message().unwrap_or_default(),
                clear_input: true,
            };
        }

        self.error = false;
        match self.round {
            StackRound::Pern => {
                self.round = StackRound::Lamp;
                Step::Progressed
            }
            StackRound::Lamp => Step::Passed,
        }
    }
}
