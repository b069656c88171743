//! Riddle stage

/// One riddle with its expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub const RIDDLES: [Riddle; 5] = [
    Riddle {
        question: "I am a word that means 'not ever', but I'm often used in dramatic vows or stubborn refusals. What am I?",
        answer: "never",
        hint: "Think: 'I will _____ surrender.'",
    },
    Riddle {
        question: "I'm a casual contraction of 'going to', and I often follow 'I'm'. What word am I?",
        answer: "gonna",
        hint: "I'm _____ be coding all night.",
    },
    Riddle {
        question: "I'm a verb that means to offer something voluntarily, often mistaken for surrender. What word am I?",
        answer: "give",
        hint: "Used in 'don't ____ up'.",
    },
    Riddle {
        question: "I'm a pronoun used to refer to a singular or plural person being addressed directly. What am I?",
        answer: "you",
        hint: "Think: 'Not me, but ___.'",
    },
    Riddle {
        question: "A short word meaning 'not down', used in direction and optimism. What is it?",
        answer: "up",
        hint: "It's where balloons go.",
    },
];

pub const WRONG_ANSWER: &str = "That's not quite right. Try again!";

/// Result of one riddle submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiddleOutcome {
    Wrong,
    /// Moved on to the riddle at this zero-based step
    Next(usize),
    Solved,
}

/// Walks the fixed riddle list in order
#[derive(Debug, Clone, Default)]
pub struct RiddleSequence {
    step: usize,
    error: bool,
}

impl RiddleSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static Riddle {
        &RIDDLES[self.step.min(RIDDLES.len() - 1)]
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Hint for the current riddle, only while the last answer was wrong
    pub fn visible_hint(&self) -> Option<&'static str> {
        self.error.then_some(self.current().hint)
    }

    /// Compare case- and surrounding-whitespace-insensitively
    pub fn submit(&mut self, answer: &str) -> RiddleOutcome {
        let expected = self.current().answer;
        if !answer.trim().eq_ignore_ascii_case(expected) {
            self.error = true;
            return RiddleOutcome::Wrong;
        }

        self.error = false;
        if self.step + 1 < RIDDLES.len() {
            self.step += 1;
            RiddleOutcome::Next(self.step)
        } else {
            RiddleOutcome::Solved
        }
    }
}
