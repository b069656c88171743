//! Terms of service acceptance
//!
//! The first two fully checked submissions are refused by unchecking a box
//! (term 1, then term 4). The third one passes.

use super::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub title: &'static str,
    pub content: &'static str,
}

pub const TERMS: [Term; 4] = [
    Term {
        title: "Cookie Policy",
        content: "I acknowledge that cookies aren't just delicious snacks but also digital tracking tools. I agree to share my browsing habits, darkest secrets, and cookie preferences with the Secret Component\u{2122}.",
    },
    Term {
        title: "Intellectual Property",
        content: "I acknowledge that any memes, jokes, or code snippets I discover through this secret component are the intellectual property of The Diddler\u{2122} and I am not allowed to claim them as my own, even if they're really funny.",
    },
    Term {
        title: "Data Collection",
        content: "I agree that the Secret Component\u{2122} may collect my keyboard typing rhythm, mouse movement patterns, and preferred development IDE for scientific purposes, including but not limited to determining if I'm actually a robot pretending to be a human developer.",
    },
    Term {
        title: "Rick Roll Clause",
        content: "I hereby acknowledge that I might be Rick Rolled at any point during my interaction with this component and agree not to be upset about it because it's a classic internet tradition.",
    },
];

/// Error text, indexed by how many fully checked submissions were refused
const MESSAGES: [&str; 3] = [
    "Please accept all terms to proceed.",
    "Hmm, looks like you didn't check all boxes. Try again?",
    "You missed another box. Are your clicks registering properly?",
];

/// Boxes unchecked on the first and second fully checked submission
const GOTCHAS: [usize; 2] = [0, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermView {
    pub title: &'static str,
    pub content: &'static str,
    pub accepted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TermsOfService {
    accepted: [bool; 4],
    refused: usize,
    error: bool,
}

impl TermsOfService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one checkbox; `None` if `index` is out of range
    pub fn toggle(&mut self, index: usize) -> Option<Step> {
        let accepted = self.accepted.get_mut(index)?;
        *accepted = !*accepted;
        self.error = false;
        Some(Step::Recorded)
    }

    pub fn submit(&mut self) -> Step {
        if !self.all_accepted() {
            self.error = true;
            return self.refusal();
        }

        match GOTCHAS.get(self.refused) {
            Some(&box_index) => {
                self.accepted[box_index] = false;
                self.refused += 1;
                self.error = true;
                self.refusal()
            }
            None => Step::Passed,
        }
    }

    pub fn all_accepted(&self) -> bool {
        self.accepted.iter().all(|&a| a)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.then(|| MESSAGES[self.refused.min(MESSAGES.len() - 1)])
    }

    pub fn terms(&self) -> Vec<TermView> {
        TERMS
            .iter()
            .zip(self.accepted)
            .map(|(term, accepted)| TermView {
                title: term.title,
                content: term.content,
                accepted,
            })
            .collect()
    }

    fn refusal(&self) -> Step {
        Step::Incorrect {
            message: self.error_message().unwrap_or(MESSAGES[0]).to_string(),
            clear_input: false,
        }
    }
}
