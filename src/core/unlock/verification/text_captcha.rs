//! Two-phase text CAPTCHA
//!
//! The visible phase shows a random code. The hidden phase asks for a code
//! that is never displayed; only the chat assistant knows it.

use super::Step;
use crate::core::chat::HIDDEN_VERIFICATION_CODE;
use rand::Rng;

/// Look-alike characters (I, O, l, 0, 1, o) are left out
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
pub const CODE_LENGTH: usize = 6;

const VISIBLE_PROMPT: &str = "Enter the characters you see";
const HIDDEN_PROMPT: &str = "Enter the characters you DON'T see";
const VISIBLE_PLACEHOLDER: &str = "Type characters here";
const HIDDEN_PLACEHOLDER: &str = "It's not on the page, but behind the scenes.";
const VISIBLE_NOTE: &str = "Final verification step: Enter the hidden code to proceed";
const HIDDEN_NOTE: &str =
    "For those on mobile, feel free to ask my assistant and you'll get what you need";
const VISIBLE_ERROR: &str = "Characters don't match. Please try again.";
const HIDDEN_ERROR: &str = "Wrong hidden code. Please try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaPhase {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCaptchaView {
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub note: &'static str,
    /// The code to copy; `None` in the hidden phase
    pub code: Option<String>,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct TextCaptcha {
    phase: CaptchaPhase,
    code: String,
    failures: u32,
    error: bool,
}

impl TextCaptcha {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: CaptchaPhase::Visible,
            code: generate_code(rng),
            failures: 0,
            error: false,
        }
    }

    pub fn phase(&self) -> CaptchaPhase {
        self.phase
    }

    /// Replace the visible code; the hidden code never changes
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.phase == CaptchaPhase::Visible {
            self.code = generate_code(rng);
        }
        Step::Recorded
    }

    pub fn submit<R: Rng + ?Sized>(&mut self, input: &str, rng: &mut R) -> Step {
        let input = input.trim();
        match self.phase {
            CaptchaPhase::Visible if input == self.code => {
                self.phase = CaptchaPhase::Hidden;
                self.error = false;
                Step::Progressed
            }
            CaptchaPhase::Visible => {
                self.failures += 1;
                // The first miss keeps the code, later misses get a new one
                if self.failures >= 2 {
                    self.code = generate_code(rng);
                }
                self.fail(VISIBLE_ERROR)
            }
            CaptchaPhase::Hidden if input == HIDDEN_VERIFICATION_CODE => Step::Passed,
            CaptchaPhase::Hidden => self.fail(HIDDEN_ERROR),
        }
    }

    pub fn view(&self) -> TextCaptchaView {
        let (prompt, placeholder, note, error) = match self.phase {
            CaptchaPhase::Visible => (VISIBLE_PROMPT, VISIBLE_PLACEHOLDER, VISIBLE_NOTE, VISIBLE_ERROR),
            CaptchaPhase::Hidden => (HIDDEN_PROMPT, HIDDEN_PLACEHOLDER, HIDDEN_NOTE, HIDDEN_ERROR),
        };
        TextCaptchaView {
            prompt,
            placeholder,
            note,
            code: (self.phase == CaptchaPhase::Visible).then(|| self.code.clone()),
            error: self.error.then_some(error),
        }
    }

    fn fail(&mut self, message: &str) -> Step {
        self.error = true;
        Step::Incorrect {
            message: message.to_string(),
            clear_input: true,
        }
    }
}

fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
